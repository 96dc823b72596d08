use super::*;

#[test]
fn validate_sign_in_input_trims_email_only() {
    assert_eq!(
        validate_sign_in_input("  ops@fleet.id ", " secret "),
        Ok(Credentials { email: "ops@fleet.id".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_sign_in_input_keeps_password_whitespace() {
    let credentials = validate_sign_in_input("ops@fleet.id", "  hunter2 ").unwrap();
    assert_eq!(credentials.password, "  hunter2 ");
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("", "secret"), Err(MISSING_INPUT));
    assert_eq!(validate_sign_in_input("ops@fleet.id", "   "), Err(MISSING_INPUT));
}

#[test]
fn status_messages_match_user_copy() {
    assert_eq!(AUTHENTICATING, "Authenticating...");
    assert_eq!(LOGIN_FAILED, "An error occurred during login. Please try again.");
    assert_eq!(WELCOME_BACK, "Welcome back.");
}
