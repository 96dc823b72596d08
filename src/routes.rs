//! The dashboard's route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Render targets are `Page` values; `app::render_page` instantiates the
//! view only once the guard decides to render it. Authentication pages are
//! public. Ship pages sit in the main layout; everything else sits in the
//! default layout.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use navigation::{NavigationError, Route, RoutePath, RouteTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TinOreStage {
    Production,
    Inventory,
    Unloading,
    Processing,
}

impl TinOreStage {
    pub const ALL: [TinOreStage; 4] =
        [TinOreStage::Production, TinOreStage::Inventory, TinOreStage::Unloading, TinOreStage::Processing];

    /// URL segment after `tin-ore/`.
    pub fn slug(self) -> &'static str {
        match self {
            TinOreStage::Production => "production",
            TinOreStage::Inventory => "inventory",
            TinOreStage::Unloading => "unloading",
            TinOreStage::Processing => "processing",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TinOreStage::Production => "Tin Ore Production",
            TinOreStage::Inventory => "Tin Ore Inventory",
            TinOreStage::Unloading => "Tin Ore Unloading",
            TinOreStage::Processing => "Tin Ore Processing",
        }
    }
}

/// Render targets of the route table, layouts included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    SignIn,
    ForgotPassword,
    LogOut,
    DefaultLayout,
    MainLayout,
    Dashboard,
    Account,
    Logsheet,
    Transaction,
    Ship,
    ShipOperation,
    TinOre(TinOreStage),
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::SignIn => "Sign In",
            Page::ForgotPassword => "Forgot Password",
            Page::LogOut => "Logging out",
            Page::DefaultLayout | Page::Dashboard => "Dashboard",
            Page::Account => "Account",
            Page::Logsheet => "Logsheet",
            Page::Transaction => "Transaction",
            Page::MainLayout | Page::Ship => "Ship",
            Page::ShipOperation => "Operation",
            Page::TinOre(stage) => stage.title(),
        }
    }
}

/// Route tree for the whole dashboard.
pub fn dashboard_routes() -> Vec<Route<Page>> {
    let mut default_children = vec![
        Route::protected(RoutePath::Index, Page::Dashboard),
        Route::protected("/logsheet", Page::Logsheet),
        Route::protected("/transaction", Page::Transaction),
        Route::protected("/account", Page::Account),
    ];
    for stage in TinOreStage::ALL {
        let slug = stage.slug();
        default_children.push(Route::protected(format!("/ship/:id/tin-ore/{slug}").as_str(), Page::TinOre(stage)));
        default_children.push(Route::protected(format!("/tin-ore/{slug}").as_str(), Page::TinOre(stage)));
    }

    vec![
        Route::public("/auth/signin", Page::SignIn),
        Route::public("/auth/forgot-password", Page::ForgotPassword),
        Route::public("/logout", Page::LogOut),
        Route::public("/auth/logout", Page::LogOut),
        Route::protected("/ship/:id", Page::MainLayout).with_children([
            Route::protected(RoutePath::Index, Page::Ship),
            Route::protected("/ship/:id/operation", Page::ShipOperation),
        ]),
        Route::protected(RoutePath::Layout, Page::DefaultLayout).with_children(default_children),
    ]
}

/// Build the validated table.
///
/// # Errors
///
/// Returns a [`NavigationError`] if the declared tree violates a table
/// invariant.
pub fn route_table() -> Result<RouteTable<Page>, NavigationError> {
    RouteTable::new(dashboard_routes())
}
