//! Per-tab authentication phase.
//!
//! `Loading` is entered once at startup while the session store is consulted.
//! It settles into `Unauthenticated` or `Authenticated`; after that the phase
//! moves between those two on login and logout. There is no terminal phase.

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

use std::fmt;

use crate::error::NavigationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated,
}

impl AuthPhase {
    fn from_login(has_login: bool) -> Self {
        if has_login {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    /// Leave `Loading` once the startup session check has completed.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidTransition`] unless the phase is
    /// `Loading`.
    pub fn settle(self, has_login: bool) -> Result<Self, NavigationError> {
        match self {
            AuthPhase::Loading => Ok(Self::from_login(has_login)),
            from => Err(NavigationError::InvalidTransition { from, event: "settle the session check" }),
        }
    }

    /// A successful authentication call.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidTransition`] unless the phase is
    /// `Unauthenticated`.
    pub fn login(self) -> Result<Self, NavigationError> {
        match self {
            AuthPhase::Unauthenticated => Ok(AuthPhase::Authenticated),
            from => Err(NavigationError::InvalidTransition { from, event: "log in" }),
        }
    }

    /// An explicit logout.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidTransition`] unless the phase is
    /// `Authenticated`.
    pub fn logout(self) -> Result<Self, NavigationError> {
        match self {
            AuthPhase::Authenticated => Ok(AuthPhase::Unauthenticated),
            from => Err(NavigationError::InvalidTransition { from, event: "log out" }),
        }
    }

    /// Reconcile with the session store at navigation time.
    ///
    /// A login id removed outside of [`AuthPhase::logout`] reads as
    /// unauthenticated here; `Loading` is left alone.
    #[must_use]
    pub fn observe(self, has_login: bool) -> Self {
        match self {
            AuthPhase::Loading => AuthPhase::Loading,
            _ => Self::from_login(has_login),
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == AuthPhase::Authenticated
    }
}

impl fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthPhase::Loading => "loading",
            AuthPhase::Unauthenticated => "unauthenticated",
            AuthPhase::Authenticated => "authenticated",
        })
    }
}
