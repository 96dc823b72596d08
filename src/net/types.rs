//! Wire DTOs for the fleet API.
//!
//! DESIGN
//! ======
//! The API is loose about scalar types (ids and fuel figures arrive as either
//! strings or numbers), so display fields deserialize through
//! `deserialize_string_from_scalar` and default when absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `Status` value the authentication endpoint uses for success.
pub const AUTH_SUCCESS_STATUS: i64 = 200;

/// Sign-in form input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Raw response of `POST /auth`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "Status", deserialize_with = "deserialize_i64_from_scalar")]
    pub status: i64,
    #[serde(rename = "loginId", default, deserialize_with = "deserialize_opt_string_from_scalar")]
    pub login_id: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// Interpreted authentication result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { login_id: String },
    Rejected { message: String },
}

impl AuthResponse {
    /// Success requires both the success status and a non-empty login id.
    pub fn into_outcome(self) -> AuthOutcome {
        let message = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "Sign in failed.".to_owned());
        match self.login_id {
            Some(login_id) if self.status == AUTH_SUCCESS_STATUS && !login_id.trim().is_empty() => {
                AuthOutcome::Success { login_id }
            }
            _ => AuthOutcome::Rejected { message },
        }
    }
}

/// One element of `GET /odyssey/ship`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipEnvelope {
    pub data: ShipData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipData {
    pub ship: ShipInfo,
    pub fuel: FuelSummary,
    pub statistic: ShipStatistic,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipInfo {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub code: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub thumbnail: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub usage_status: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub current_status: String,
}

/// Fuel totals in litres, as display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FuelSummary {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub total: String,
    #[serde(rename = "in", deserialize_with = "deserialize_string_from_scalar")]
    pub fuel_in: String,
    #[serde(rename = "out", deserialize_with = "deserialize_string_from_scalar")]
    pub fuel_out: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub remain: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub last_transaction_date: String,
}

/// Per-ship operating statistics shown on the logsheet and dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipStatistic {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub downtime: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub fuel_in: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub fuel_out: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub timah: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub tailing: String,
}

/// One element of `GET /odyssey/coordinate?ship_id=`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoordinateEnvelope {
    pub data: CoordinateData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoordinateData {
    pub coordinate: Coordinate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub date: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub latitude: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub longitude: String,
}

fn scalar_to_string(value: serde_json::Value) -> Result<Option<String>, String> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected scalar, got {other}")),
    }
}

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    scalar_to_string(value).map_err(D::Error::custom)
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string_from_scalar(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_scalar<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::custom(format!("expected integer status, got {value}")))
}
