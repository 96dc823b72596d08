use super::*;

#[test]
fn empty_store_is_unauthenticated() {
    let session = Session::new(MemoryStore::default());
    assert!(!session.is_authenticated());
    assert_eq!(session.login_id(), None);
}

#[test]
fn login_stores_token_under_login_id_key() {
    let store = MemoryStore::default();
    let session = Session::new(store.clone());
    session.login("1234").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(store.get(LOGIN_ID_KEY).as_deref(), Some("1234"));
}

#[test]
fn logout_clears_token() {
    let session = Session::new(MemoryStore::default());
    session.login("1234").unwrap();
    session.logout().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.store().get(LOGIN_ID_KEY), None);
}

#[test]
fn blank_token_is_not_a_session() {
    let store = MemoryStore::default();
    store.set(LOGIN_ID_KEY, "  ").unwrap();
    assert!(!Session::new(store).is_authenticated());
}

#[test]
fn external_clear_is_seen_on_next_read() {
    let store = MemoryStore::default();
    let session = Session::new(store.clone());
    session.login("abc").unwrap();
    store.remove(LOGIN_ID_KEY).unwrap();
    assert!(!session.is_authenticated());
}
