use super::*;

#[test]
fn defaults_without_build_env() {
    let config = AppConfig::from_lookup(|_| None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.guard.loading_delay_ms, DEFAULT_LOADING_DELAY_MS);
    assert_eq!(config.guard.sign_in_path, "/auth/signin");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = AppConfig::from_lookup(|key| (key == API_BASE_URL_VAR).then_some("http://localhost:8080/"));
    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.endpoint("/odyssey/ship"), "http://localhost:8080/odyssey/ship");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = AppConfig::from_lookup(|key| (key == API_BASE_URL_VAR).then_some("   "));
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn loading_delay_parses_or_defaults() {
    let config = AppConfig::from_lookup(|key| (key == LOADING_DELAY_MS_VAR).then_some("250"));
    assert_eq!(config.guard.loading_delay_ms, 250);

    let config = AppConfig::from_lookup(|key| (key == LOADING_DELAY_MS_VAR).then_some("soon"));
    assert_eq!(config.guard.loading_delay_ms, DEFAULT_LOADING_DELAY_MS);
}

#[test]
fn endpoint_joins_paths_without_double_slash() {
    let config = AppConfig::default();
    assert_eq!(config.endpoint("auth"), "https://api.greenforgood.id/auth");
    assert_eq!(config.endpoint("/auth"), "https://api.greenforgood.id/auth");
}
