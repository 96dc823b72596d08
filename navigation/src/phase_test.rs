use super::*;

#[test]
fn starts_loading() {
    assert_eq!(AuthPhase::default(), AuthPhase::Loading);
}

#[test]
fn settle_follows_store_contents() {
    assert_eq!(AuthPhase::Loading.settle(true), Ok(AuthPhase::Authenticated));
    assert_eq!(AuthPhase::Loading.settle(false), Ok(AuthPhase::Unauthenticated));
}

#[test]
fn settle_only_once() {
    let err = AuthPhase::Authenticated.settle(true).unwrap_err();
    assert_eq!(err.to_string(), "cannot settle the session check while authenticated");
}

#[test]
fn login_then_logout_cycles() {
    let phase = AuthPhase::Unauthenticated.login().unwrap();
    assert_eq!(phase, AuthPhase::Authenticated);
    assert_eq!(phase.logout(), Ok(AuthPhase::Unauthenticated));
}

#[test]
fn login_rejected_while_loading_or_authenticated() {
    assert!(AuthPhase::Loading.login().is_err());
    assert!(AuthPhase::Authenticated.login().is_err());
}

#[test]
fn logout_rejected_unless_authenticated() {
    assert_eq!(
        AuthPhase::Unauthenticated.logout(),
        Err(NavigationError::InvalidTransition { from: AuthPhase::Unauthenticated, event: "log out" })
    );
}

#[test]
fn observe_drops_session_lost_outside_logout() {
    assert_eq!(AuthPhase::Authenticated.observe(false), AuthPhase::Unauthenticated);
    assert_eq!(AuthPhase::Unauthenticated.observe(true), AuthPhase::Authenticated);
    assert_eq!(AuthPhase::Loading.observe(true), AuthPhase::Loading);
}
