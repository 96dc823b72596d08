use leptos::prelude::Owner;
use navigation::{LOGIN_ID_KEY, MemoryStore};

use super::*;

fn with_state(test: impl FnOnce(SessionState, Session<MemoryStore>)) {
    let owner = Owner::new();
    owner.with(|| test(SessionState::default(), Session::new(MemoryStore::default())));
}

#[test]
fn starts_loading_then_settles() {
    with_state(|state, _| {
        assert_eq!(state.phase.get_untracked(), AuthPhase::Loading);
        state.settle(false);
        assert_eq!(state.phase.get_untracked(), AuthPhase::Unauthenticated);
    });
}

#[test]
fn second_settle_is_ignored() {
    with_state(|state, _| {
        state.settle(true);
        state.settle(false);
        assert_eq!(state.phase.get_untracked(), AuthPhase::Authenticated);
    });
}

#[test]
fn login_stores_id_and_authenticates() {
    with_state(|state, session| {
        state.settle(false);
        state.complete_login(&session, "77").unwrap();
        assert_eq!(state.phase.get_untracked(), AuthPhase::Authenticated);
        assert_eq!(session.store().get(LOGIN_ID_KEY).as_deref(), Some("77"));
    });
}

#[test]
fn logout_clears_id_and_unauthenticates() {
    with_state(|state, session| {
        session.login("77").unwrap();
        state.settle(true);
        state.complete_logout(&session).unwrap();
        assert_eq!(state.phase.get_untracked(), AuthPhase::Unauthenticated);
        assert!(!session.is_authenticated());
    });
}

#[test]
fn observe_notices_external_clear() {
    with_state(|state, session| {
        session.login("77").unwrap();
        state.settle(true);
        session.store().remove(LOGIN_ID_KEY).unwrap();
        assert_eq!(state.observe(&session), AuthPhase::Unauthenticated);
        assert_eq!(state.phase.get_untracked(), AuthPhase::Unauthenticated);
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_empty_natively() {
    assert_eq!(BrowserSessionStore.get(LOGIN_ID_KEY), None);
    assert!(BrowserSessionStore.set(LOGIN_ID_KEY, "1").is_err());
}
