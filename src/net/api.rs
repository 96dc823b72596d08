//! REST helpers for the authentication service and the fleet API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`], so pages and
//! tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages turn errors into a message
//! instead of panicking. There is no automatic retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use navigation::redirect::encode_component;

use super::types::{AuthOutcome, CoordinateEnvelope, Credentials, ShipEnvelope};
use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

fn auth_endpoint(config: &AppConfig) -> String {
    config.endpoint("/auth")
}

fn ships_endpoint(config: &AppConfig) -> String {
    config.endpoint("/odyssey/ship")
}

fn ship_endpoint(config: &AppConfig, ship_id: &str) -> String {
    format!("{}?id={}", ships_endpoint(config), encode_component(ship_id))
}

fn coordinates_endpoint(config: &AppConfig, ship_id: &str) -> String {
    format!("{}?ship_id={}", config.endpoint("/odyssey/coordinate"), encode_component(ship_id))
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a login id via multipart `POST /auth`.
///
/// A rejected login is `Ok(AuthOutcome::Rejected)`; only transport and
/// decoding problems are errors.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers with a
/// non-OK status, or the body is not an auth response.
pub async fn authenticate(config: &AppConfig, credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_str("email", &credentials.email)
            .and_then(|()| form.append_with_str("password", &credentials.password))
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp = gloo_net::http::Request::post(&auth_endpoint(config))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::AuthResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_outcome())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth_endpoint(config), credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every ship with its fuel summary.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failure.
pub async fn fetch_ships(config: &AppConfig) -> Result<Vec<ShipEnvelope>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&ships_endpoint(config)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ships_endpoint(config);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one ship; `Ok(None)` when the API returns an empty list.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failure.
pub async fn fetch_ship(config: &AppConfig, ship_id: &str) -> Result<Option<ShipEnvelope>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let ships: Vec<ShipEnvelope> = get_json(&ship_endpoint(config, ship_id)).await?;
        Ok(ships.into_iter().next())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ship_endpoint(config, ship_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the position log of one ship.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failure.
pub async fn fetch_coordinates(config: &AppConfig, ship_id: &str) -> Result<Vec<CoordinateEnvelope>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&coordinates_endpoint(config, ship_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = coordinates_endpoint(config, ship_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a list of loosely-typed records from an API path such as
/// `/odyssey/transaction`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failure.
pub async fn fetch_records(config: &AppConfig, path: &str) -> Result<Vec<serde_json::Value>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&config.endpoint(path)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config.endpoint(path);
        Err(ApiError::Unavailable)
    }
}
