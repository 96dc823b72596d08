use super::*;

fn pattern(raw: &str) -> PathPattern {
    PathPattern::parse(raw).unwrap()
}

#[test]
fn parse_normalizes_slashes() {
    assert_eq!(pattern("ship//:id/").to_string(), "/ship/:id");
    assert_eq!(pattern("/").to_string(), "/");
    assert_eq!(pattern(""), PathPattern::root());
}

#[test]
fn parse_rejects_empty_param_name() {
    let err = PathPattern::parse("/ship/:").unwrap_err();
    assert!(matches!(err, NavigationError::InvalidPattern { .. }));
}

#[test]
fn parse_rejects_repeated_param_name() {
    assert!(PathPattern::parse("/ship/:id/log/:id").is_err());
}

#[test]
fn parse_rejects_query_characters() {
    assert!(PathPattern::parse("/ship?id=1").is_err());
}

#[test]
fn matches_captures_param() {
    let params = pattern("/ship/:id/operation").matches("/ship/42/operation").unwrap();
    assert_eq!(params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn matches_ignores_trailing_slash() {
    assert!(pattern("/logsheet").matches("/logsheet/").is_some());
}

#[test]
fn matches_rejects_different_length_or_literal() {
    let p = pattern("/ship/:id");
    assert!(p.matches("/ship").is_none());
    assert!(p.matches("/ship/7/operation").is_none());
    assert!(p.matches("/boat/7").is_none());
}

#[test]
fn matches_decodes_param_values() {
    let params = pattern("/ship/:id").matches("/ship/KM%20Timah").unwrap();
    assert_eq!(params["id"], "KM Timah");
}

#[test]
fn root_matches_only_root() {
    let root = PathPattern::root();
    assert_eq!(root.matches("/"), Some(Params::new()));
    assert_eq!(root.matches(""), Some(Params::new()));
    assert!(root.matches("/logsheet").is_none());
}

#[test]
fn same_shape_ignores_param_names() {
    assert!(pattern("/ship/:id").same_shape(&pattern("/ship/:ship_id")));
    assert!(!pattern("/ship/:id").same_shape(&pattern("/ship/new")));
    assert!(!pattern("/ship/:id").same_shape(&pattern("/ship/:id/operation")));
}

#[test]
fn starts_with_compares_segments() {
    let parent = pattern("/ship/:id");
    assert!(pattern("/ship/:id/operation").starts_with(&parent));
    assert!(!pattern("/tin-ore/production").starts_with(&parent));
    assert!(pattern("/anything").starts_with(&PathPattern::root()));
}

#[test]
fn join_appends_child_segments() {
    let joined = pattern("/ship/:id").join(&pattern("operation")).unwrap();
    assert_eq!(joined.to_string(), "/ship/:id/operation");
    assert!(pattern("/ship/:id").join(&pattern(":id")).is_err());
}

#[test]
fn static_count_counts_literals() {
    assert_eq!(pattern("/ship/:id/tin-ore/production").static_count(), 3);
    assert_eq!(PathPattern::root().static_count(), 0);
}
