//! Location helpers: request strings, hard redirects, and route parameters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages only read path parameters and navigate. The guarded outlet in `app`
//! publishes the matched parameters through [`RouteParams`].

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use leptos::prelude::*;
use navigation::Params;

/// Join a pathname and a search string (with or without `?`) into the
/// request string the guard resolves.
pub fn request_from_parts(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Full page load of `location`, discarding all in-memory state.
pub fn hard_redirect(location: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(location) {
                log::warn!("hard redirect to {location} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = location;
    }
}

/// Parameters captured by the route the guard rendered.
#[derive(Clone, Copy, Debug)]
pub struct RouteParams(pub RwSignal<Params>);

impl Default for RouteParams {
    fn default() -> Self {
        Self(RwSignal::new(Params::new()))
    }
}

/// Reactive value of path parameter `name` for the current route.
pub fn use_route_param(name: &'static str) -> Signal<Option<String>> {
    let params = expect_context::<RouteParams>();
    Signal::derive(move || params.0.with(|p| p.get(name).cloned()))
}
