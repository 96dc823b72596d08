//! Route authorization and navigation guard for the fleet dashboard.
//!
//! This crate owns the decision of which view a navigation renders. It has no
//! browser dependencies: the `mokapro` client feeds it the current location
//! and session phase and applies the returned [`Outcome`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `route` + `table` hold the static route tree, `guard` resolves a request
//! against it, `redirect` carries the requested path through sign-in, and
//! `session` / `phase` / `task` model the tab-scoped login state and its
//! one-shot startup check.

pub mod config;
pub mod error;
pub mod guard;
pub mod pattern;
pub mod phase;
pub mod redirect;
pub mod route;
pub mod session;
pub mod table;
pub mod task;

pub use config::GuardConfig;
pub use error::NavigationError;
pub use guard::{Outcome, resolve};
pub use pattern::{Params, PathPattern};
pub use phase::AuthPhase;
pub use route::{Access, Route, RoutePath, RouteSpec};
pub use session::{LOGIN_ID_KEY, MemoryStore, Session, SessionProvider, SessionStore};
pub use table::{RouteMatch, RouteTable};
pub use task::{Cancelled, TaskGuard, one_shot, session_check};
