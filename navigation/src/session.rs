//! Session provider over an injectable key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs [`SessionStore`] with `sessionStorage`; tests and
//! native builds use [`MemoryStore`]. The only writers are login (set) and
//! logout (remove).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::NavigationError;

/// Store key holding the login identifier.
pub const LOGIN_ID_KEY: &str = "loginId";

/// Tab-scoped key-value store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`NavigationError::Storage`] if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), NavigationError>;

    /// # Errors
    ///
    /// Returns [`NavigationError::Storage`] if the backing store rejects the write.
    fn remove(&self, key: &str) -> Result<(), NavigationError>;
}

/// Authentication fact as seen by the guard and pages.
pub trait SessionProvider {
    fn login_id(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`NavigationError::Storage`] if the token cannot be stored.
    fn login(&self, token: &str) -> Result<(), NavigationError>;

    /// # Errors
    ///
    /// Returns [`NavigationError::Storage`] if the token cannot be cleared.
    fn logout(&self) -> Result<(), NavigationError>;

    fn is_authenticated(&self) -> bool {
        self.login_id().is_some()
    }
}

/// In-memory store; clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NavigationError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), NavigationError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// [`SessionProvider`] storing the login id under [`LOGIN_ID_KEY`].
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: SessionStore> SessionProvider for Session<S> {
    /// Blank values count as absent.
    fn login_id(&self) -> Option<String> {
        self.store.get(LOGIN_ID_KEY).filter(|id| !id.trim().is_empty())
    }

    fn login(&self, token: &str) -> Result<(), NavigationError> {
        self.store.set(LOGIN_ID_KEY, token)?;
        log::debug!("session: login id stored");
        Ok(())
    }

    fn logout(&self) -> Result<(), NavigationError> {
        self.store.remove(LOGIN_ID_KEY)?;
        log::debug!("session: login id cleared");
        Ok(())
    }
}
