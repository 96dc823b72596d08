//! Redirect-preservation through the sign-in detour.
//!
//! The requested path (with its own query string) travels as one
//! percent-encoded query parameter on the sign-in URL and is read back after
//! a successful login. Encoding uses the `encodeURIComponent` character set,
//! so `decode_component(&encode_component(p)) == p` for every string.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::config::GuardConfig;
use crate::error::NavigationError;

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a single query parameter.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Reverse of [`encode_component`].
///
/// # Errors
///
/// Returns [`NavigationError::MalformedEncoding`] if the decoded bytes are not UTF-8.
pub fn decode_component(value: &str) -> Result<String, NavigationError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| NavigationError::MalformedEncoding(value.to_owned()))
}

/// Sign-in URL carrying `requested` in the redirect parameter.
#[must_use]
pub fn sign_in_location(config: &GuardConfig, requested: &str) -> String {
    format!("{}?{}={}", config.sign_in_path, config.redirect_param, encode_component(requested))
}

/// Raw value of query parameter `name`. A leading `?` is accepted.
#[must_use]
pub fn query_param<'q>(query: &'q str, name: &str) -> Option<&'q str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Whether `path` stays on this origin.
#[must_use]
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Decoded redirect target from a sign-in query string.
///
/// Absent, empty, undecodable, and non-local values yield `None`.
#[must_use]
pub fn redirect_target(config: &GuardConfig, query: &str) -> Option<String> {
    let raw = query_param(query, &config.redirect_param)?;
    let decoded = match decode_component(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("redirect: {e}");
            return None;
        }
    };
    if decoded.is_empty() {
        return None;
    }
    if !is_local_path(&decoded) {
        log::warn!("redirect: ignoring non-local target {decoded:?}");
        return None;
    }
    Some(decoded)
}

/// Where to navigate after a successful login.
#[must_use]
pub fn post_login_destination(config: &GuardConfig, query: &str) -> String {
    redirect_target(config, query).unwrap_or_else(|| config.default_path.clone())
}
