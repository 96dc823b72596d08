//! Declarative route tree.
//!
//! DESIGN
//! ======
//! Every node is tagged `Public` or `Protected`. Protection is inherited: a
//! node below a protected ancestor is protected whatever its own tag says.
//! Nodes with children are layouts whose target wraps the matched child;
//! only leaves resolve concrete URLs.

/// Whether a route needs an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

impl Access {
    /// Combine a node's own access with its ancestors'.
    #[must_use]
    pub fn inherit(self, parent: Access) -> Access {
        if self == Access::Protected || parent == Access::Protected {
            Access::Protected
        } else {
            Access::Public
        }
    }
}

/// How a node contributes to the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePath {
    /// Resolves exactly the parent's path.
    Index,
    /// Pathless grouping node; children keep the parent's prefix.
    Layout,
    /// Absolute (`/ship/:id`) or parent-relative (`operation`) pattern.
    Path(String),
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        RoutePath::Path(path.to_owned())
    }
}

/// Path, render target, and children of one node.
#[derive(Clone, Debug)]
pub struct RouteSpec<T> {
    pub path: RoutePath,
    pub target: T,
    pub children: Vec<Route<T>>,
}

/// One node of the route tree.
#[derive(Clone, Debug)]
pub enum Route<T> {
    Public(RouteSpec<T>),
    Protected(RouteSpec<T>),
}

impl<T> Route<T> {
    /// Node reachable without a session.
    pub fn public(path: impl Into<RoutePath>, target: T) -> Self {
        Route::Public(RouteSpec { path: path.into(), target, children: Vec::new() })
    }

    /// Node reachable only with a session.
    pub fn protected(path: impl Into<RoutePath>, target: T) -> Self {
        Route::Protected(RouteSpec { path: path.into(), target, children: Vec::new() })
    }

    /// Replace this node's children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Route<T>>) -> Self {
        self.spec_mut().children = children.into_iter().collect();
        self
    }

    #[must_use]
    pub fn access(&self) -> Access {
        match self {
            Route::Public(_) => Access::Public,
            Route::Protected(_) => Access::Protected,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &RouteSpec<T> {
        match self {
            Route::Public(spec) | Route::Protected(spec) => spec,
        }
    }

    #[must_use]
    pub fn into_spec(self) -> RouteSpec<T> {
        match self {
            Route::Public(spec) | Route::Protected(spec) => spec,
        }
    }

    fn spec_mut(&mut self) -> &mut RouteSpec<T> {
        match self {
            Route::Public(spec) | Route::Protected(spec) => spec,
        }
    }
}
