//! Session context: the tab's auth phase plus its backing store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `SessionState` via context. The guard reads the phase
//! on every navigation; sign-in and logout pages drive the transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use navigation::{AuthPhase, NavigationError, Session, SessionProvider, SessionStore};

/// [`SessionStore`] backed by the tab's `sessionStorage`.
///
/// Outside the browser reads are empty and writes fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn session_storage() -> Result<web_sys::Storage, NavigationError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| NavigationError::Storage("sessionStorage is not available".to_owned()))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NavigationError> {
        #[cfg(feature = "csr")]
        {
            session_storage()?
                .set_item(key, value)
                .map_err(|e| NavigationError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(NavigationError::Storage("sessionStorage is not available".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), NavigationError> {
        #[cfg(feature = "csr")]
        {
            session_storage()?
                .remove_item(key)
                .map_err(|e| NavigationError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(NavigationError::Storage("sessionStorage is not available".to_owned()))
        }
    }
}

/// Session provider used by the running app.
pub fn browser_session() -> Session<BrowserSessionStore> {
    Session::new(BrowserSessionStore)
}

/// Reactive auth phase shared through context.
#[derive(Clone, Copy, Debug)]
pub struct SessionState {
    pub phase: RwSignal<AuthPhase>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { phase: RwSignal::new(AuthPhase::Loading) }
    }
}

impl SessionState {
    /// Apply a phase transition; invalid transitions are logged and ignored.
    pub fn transition(&self, step: impl FnOnce(AuthPhase) -> Result<AuthPhase, NavigationError>) {
        let current = self.phase.get_untracked();
        match step(current) {
            Ok(next) if next != current => self.phase.set(next),
            Ok(_) => {}
            Err(e) => log::warn!("session: {e}"),
        }
    }

    /// Finish the startup check.
    pub fn settle(&self, has_login: bool) {
        self.transition(|phase| phase.settle(has_login));
    }

    /// Store the login id and move to `Authenticated`.
    ///
    /// # Errors
    ///
    /// Returns the store error; the phase is left unchanged in that case.
    pub fn complete_login(&self, provider: &impl SessionProvider, login_id: &str) -> Result<(), NavigationError> {
        provider.login(login_id)?;
        self.transition(AuthPhase::login);
        Ok(())
    }

    /// Clear the login id and move to `Unauthenticated`.
    ///
    /// # Errors
    ///
    /// Returns the store error; the phase is left unchanged in that case.
    pub fn complete_logout(&self, provider: &impl SessionProvider) -> Result<(), NavigationError> {
        provider.logout()?;
        self.transition(AuthPhase::logout);
        Ok(())
    }

    /// Reconcile the phase with the store at navigation time and return it.
    pub fn observe(&self, provider: &impl SessionProvider) -> AuthPhase {
        let current = self.phase.get_untracked();
        let observed = current.observe(provider.is_authenticated());
        if observed != current {
            log::info!("session: store says {observed}, phase was {current}");
            self.phase.set(observed);
        }
        observed
    }
}
