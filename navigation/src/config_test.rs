use super::*;

#[test]
fn default_config_matches_dashboard_paths() {
    let config = GuardConfig::default();
    assert_eq!(config.sign_in_path, "/auth/signin");
    assert_eq!(config.default_path, "/");
    assert_eq!(config.redirect_param, "redirect");
    assert_eq!(config.loading_delay(), Duration::from_secs(1));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config: GuardConfig = serde_json::from_str(r#"{ "loading_delay_ms": 250 }"#).unwrap();
    assert_eq!(config.loading_delay_ms, 250);
    assert_eq!(config.sign_in_path, DEFAULT_SIGN_IN_PATH);
    assert_eq!(config.redirect_param, DEFAULT_REDIRECT_PARAM);
}

#[test]
fn with_loading_delay_overrides_only_delay() {
    let config = GuardConfig::default().with_loading_delay_ms(0);
    assert_eq!(config.loading_delay(), Duration::ZERO);
    assert_eq!(config.default_path, DEFAULT_INDEX_PATH);
}
