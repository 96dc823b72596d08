//! Root application component and the guarded outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides shared contexts and starts the startup session check.
//! `GuardedOutlet` turns the current location plus auth phase into a
//! [`Decision`] and either renders the page inside its layouts or replaces
//! the history entry with the redirect target.
//!
//! DESIGN
//! ======
//! `Decision` is an owned copy of [`navigation::Outcome`] so it can live in a
//! memo; equal decisions do not re-render the page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};
use navigation::{AuthPhase, GuardConfig, Outcome, Params, RouteTable, SessionProvider};

use crate::components::default_layout::DefaultLayout;
use crate::components::loader::Loader;
use crate::components::main_layout::MainLayout;
use crate::config::AppConfig;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::logout::LogOutPage;
use crate::pages::logsheet::LogsheetPage;
use crate::pages::records::{RecordSource, RecordsPage};
use crate::pages::ship::ShipPage;
use crate::pages::ship_operation::ShipOperationPage;
use crate::pages::sign_in::SignInPage;
use crate::routes::{Page, route_table};
use crate::state::session::{SessionState, browser_session};
use crate::util::location::{RouteParams, request_from_parts};

/// What the outlet should do for the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Loading,
    Render { page: Page, layouts: Vec<Page>, params: Params },
    Redirect(String),
    NotFound,
}

/// Resolve `request` against `table` and detach the result from the table.
pub fn decide(table: &RouteTable<Page>, config: &GuardConfig, request: &str, phase: AuthPhase) -> Decision {
    match navigation::resolve(table, config, request, phase) {
        Outcome::Loading => Decision::Loading,
        Outcome::Render(m) => Decision::Render {
            page: *m.target,
            layouts: m.layouts.into_iter().copied().collect(),
            params: m.params,
        },
        Outcome::RedirectToSignIn { location, .. } | Outcome::RedirectToDefault { location } => {
            Decision::Redirect(location)
        }
        Outcome::NotFound { .. } => Decision::NotFound,
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let session = SessionState::default();
    provide_context(config.clone());
    provide_context(session);
    provide_context(RouteParams::default());

    start_session_check(session, &config);

    view! {
        <Title text="MOKAPRO"/>
        <Router>
            <GuardedOutlet/>
        </Router>
    }
}

/// Settle the `Loading` phase once the configured delay has passed.
///
/// The check is cancelled if the app unmounts first.
fn start_session_check(session: SessionState, config: &AppConfig) {
    #[cfg(feature = "csr")]
    {
        let delay = gloo_timers::future::sleep(config.guard.loading_delay());
        let (guard, check) = navigation::session_check(crate::state::session::BrowserSessionStore, delay);
        on_cleanup(move || guard.cancel());
        leptos::task::spawn_local(async move {
            match check.await {
                Ok(has_login) => session.settle(has_login),
                Err(e) => log::debug!("session check: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config);
    }
}

#[component]
fn GuardedOutlet() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<SessionState>();
    let params = expect_context::<RouteParams>();
    let location = use_location();
    let navigate = use_navigate();

    let table = match route_table() {
        Ok(table) => StoredValue::new(table),
        Err(e) => {
            log::error!("route table: {e}");
            return view! { <p class="app-error">"The dashboard failed to start."</p> }.into_any();
        }
    };

    // Keep the shared phase in step with the store on every navigation.
    Effect::new(move || {
        location.pathname.track();
        if session.phase.get_untracked() != AuthPhase::Loading {
            session.observe(&browser_session());
        }
    });

    let guard = config.guard.clone();
    let decision = Memo::new(move |_| {
        let request = request_from_parts(&location.pathname.get(), &location.search.get());
        let phase = session.phase.get().observe(browser_session().is_authenticated());
        table.with_value(|table| decide(table, &guard, &request, phase))
    });

    Effect::new(move || {
        if let Decision::Redirect(target) = decision.get() {
            log::info!("guard: redirecting to {target}");
            navigate(&target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    (move || match decision.get() {
        Decision::Loading | Decision::Redirect(_) => view! { <Loader/> }.into_any(),
        Decision::NotFound => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        Decision::Render { page, layouts, params: route_params } => {
            if params.0.get_untracked() != route_params {
                params.0.set(route_params);
            }
            render_route(page, &layouts)
        }
    })
    .into_any()
}

/// Render `page` wrapped in `layouts`, outermost first.
fn render_route(page: Page, layouts: &[Page]) -> AnyView {
    layouts
        .iter()
        .rev()
        .fold(render_page(page), |inner, layout| render_layout(*layout, page, inner))
}

fn render_layout(layout: Page, page: Page, inner: AnyView) -> AnyView {
    match layout {
        Page::DefaultLayout => view! { <DefaultLayout>{inner}</DefaultLayout> }.into_any(),
        Page::MainLayout => view! { <MainLayout title=page.title()>{inner}</MainLayout> }.into_any(),
        other => {
            log::warn!("guard: {other:?} is not a layout");
            inner
        }
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::SignIn => view! { <SignInPage/> }.into_any(),
        Page::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
        Page::LogOut => view! { <LogOutPage/> }.into_any(),
        Page::Dashboard | Page::Account => view! { <DashboardPage/> }.into_any(),
        Page::Logsheet => view! { <LogsheetPage/> }.into_any(),
        Page::Transaction => view! { <RecordsPage source=RecordSource::Transaction/> }.into_any(),
        Page::TinOre(stage) => view! { <RecordsPage source=RecordSource::TinOre(stage)/> }.into_any(),
        Page::Ship => view! { <ShipPage/> }.into_any(),
        Page::ShipOperation => view! { <ShipOperationPage/> }.into_any(),
        Page::DefaultLayout | Page::MainLayout => {
            view! { <p class="not-found">"Page not found."</p> }.into_any()
        }
    }
}
