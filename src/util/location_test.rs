use super::*;

#[test]
fn request_without_search_is_pathname() {
    assert_eq!(request_from_parts("/ship/7", ""), "/ship/7");
    assert_eq!(request_from_parts("/ship/7", "?"), "/ship/7");
}

#[test]
fn request_keeps_search_verbatim() {
    assert_eq!(request_from_parts("/logsheet", "?date=2024-01-01"), "/logsheet?date=2024-01-01");
    assert_eq!(request_from_parts("/logsheet", "a=%20b"), "/logsheet?a=%20b");
}

#[cfg(not(feature = "csr"))]
#[test]
fn hard_redirect_is_noop_natively() {
    hard_redirect("/auth/signin");
}

#[test]
fn route_param_reads_published_params() {
    let owner = Owner::new();
    owner.with(|| {
        let params = RouteParams::default();
        provide_context(params);
        let id = use_route_param("id");
        assert_eq!(id.get_untracked(), None);
        params.0.set(Params::from([("id".to_owned(), "42".to_owned())]));
        assert_eq!(id.get_untracked().as_deref(), Some("42"));
    });
}
