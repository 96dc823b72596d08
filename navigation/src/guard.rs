//! Navigation guard: pure decision from (request, phase, table) to outcome.
//!
//! ARCHITECTURE
//! ============
//! `resolve` is evaluated on every navigation and every phase change. It
//! never performs the navigation itself; the client applies the outcome
//! (render, or replace the location), so at most one redirect happens per
//! navigation event.
//!
//! Unknown paths are asymmetric: unauthenticated they fold into the sign-in
//! redirect (catch-all), authenticated they are `NotFound`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GuardConfig;
use crate::phase::AuthPhase;
use crate::redirect::sign_in_location;
use crate::route::Access;
use crate::table::{RouteMatch, RouteTable};

/// What a navigation should do.
#[derive(Debug)]
pub enum Outcome<'t, T> {
    /// The startup session check has not finished.
    Loading,
    /// Render the matched leaf inside its layouts.
    Render(RouteMatch<'t, T>),
    /// Replace the location with the sign-in URL carrying `requested`.
    RedirectToSignIn { requested: String, location: String },
    /// Replace the location with the default view.
    RedirectToDefault { location: String },
    /// Authenticated request for a path no route declares.
    NotFound { path: String },
}

impl<T> Outcome<'_, T> {
    /// Location to replace the current one with, for redirect outcomes.
    #[must_use]
    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Outcome::RedirectToSignIn { location, .. } | Outcome::RedirectToDefault { location } => Some(location),
            _ => None,
        }
    }
}

/// Split `path?query` into its parts; the query excludes the `?`.
#[must_use]
pub fn split_request(request: &str) -> (&str, &str) {
    let request = request.split_once('#').map_or(request, |(before, _)| before);
    request.split_once('?').unwrap_or((request, ""))
}

/// Decide what navigating to `request` (path plus optional query) does.
pub fn resolve<'t, T>(
    table: &'t RouteTable<T>,
    config: &GuardConfig,
    request: &str,
    phase: AuthPhase,
) -> Outcome<'t, T> {
    let outcome = decide(table, config, request, phase);
    match &outcome {
        Outcome::Loading => log::trace!("guard: {request:?} waits for session check"),
        Outcome::Render(m) => log::debug!("guard: {request:?} renders {}", m.pattern),
        Outcome::RedirectToSignIn { location, .. } | Outcome::RedirectToDefault { location } => {
            log::debug!("guard: {request:?} redirects to {location}");
        }
        Outcome::NotFound { path } => log::warn!("guard: no route for {path:?}"),
    }
    outcome
}

fn decide<'t, T>(table: &'t RouteTable<T>, config: &GuardConfig, request: &str, phase: AuthPhase) -> Outcome<'t, T> {
    let authenticated = match phase {
        AuthPhase::Loading => return Outcome::Loading,
        AuthPhase::Unauthenticated => false,
        AuthPhase::Authenticated => true,
    };

    let to_sign_in = |requested: &str| Outcome::RedirectToSignIn {
        requested: requested.to_owned(),
        location: sign_in_location(config, requested),
    };

    if request.trim().is_empty() {
        return if authenticated {
            Outcome::RedirectToDefault { location: config.default_path.clone() }
        } else {
            to_sign_in(&config.default_path)
        };
    }

    let (path, _) = split_request(request);
    match table.find(path) {
        Some(m) if m.access == Access::Public || authenticated => Outcome::Render(m),
        Some(_) => to_sign_in(request),
        None if authenticated => Outcome::NotFound { path: path.to_owned() },
        None => to_sign_in(request),
    }
}
