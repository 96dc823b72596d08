//! Guard configuration: well-known paths and the startup loading delay.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/signin";
pub const DEFAULT_INDEX_PATH: &str = "/";
pub const DEFAULT_REDIRECT_PARAM: &str = "redirect";
pub const DEFAULT_LOADING_DELAY_MS: u64 = 1000;

/// Paths and timings the guard needs besides the route table itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Where unauthenticated navigations are sent.
    pub sign_in_path: String,
    /// The default (index) view.
    pub default_path: String,
    /// Query parameter on the sign-in URL carrying the requested path.
    pub redirect_param: String,
    /// Minimum time the loading state is shown at startup.
    pub loading_delay_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_owned(),
            default_path: DEFAULT_INDEX_PATH.to_owned(),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_owned(),
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
        }
    }
}

impl GuardConfig {
    /// Loading delay as a [`Duration`].
    #[must_use]
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Copy of this config with a different loading delay.
    #[must_use]
    pub fn with_loading_delay_ms(mut self, loading_delay_ms: u64) -> Self {
        self.loading_delay_ms = loading_delay_ms;
        self
    }
}
