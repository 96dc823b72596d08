//! Application configuration baked in at build time.
//!
//! The bundle runs in the browser, so settings come from the build
//! environment (`option_env!`) rather than the runtime one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use navigation::GuardConfig;
use navigation::config::DEFAULT_LOADING_DELAY_MS;

pub const DEFAULT_API_BASE_URL: &str = "https://api.greenforgood.id";

pub const API_BASE_URL_VAR: &str = "MOKAPRO_API_BASE_URL";
pub const LOADING_DELAY_MS_VAR: &str = "MOKAPRO_LOADING_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fleet API origin, without a trailing slash.
    pub api_base_url: String,
    pub guard: GuardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `MOKAPRO_API_BASE_URL`: default `https://api.greenforgood.id`
    /// - `MOKAPRO_LOADING_DELAY_MS`: default 1000
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            API_BASE_URL_VAR => option_env!("MOKAPRO_API_BASE_URL"),
            LOADING_DELAY_MS_VAR => option_env!("MOKAPRO_LOADING_DELAY_MS"),
            _ => None,
        })
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let api_base_url = lookup(API_BASE_URL_VAR)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let loading_delay_ms = parse_u64(lookup(LOADING_DELAY_MS_VAR), DEFAULT_LOADING_DELAY_MS);

        Self { api_base_url, guard: GuardConfig::default().with_loading_delay_ms(loading_delay_ms) }
    }

    /// Absolute URL for an API path such as `/odyssey/ship`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
