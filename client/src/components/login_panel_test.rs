use super::*;

#[test]
fn validate_login_input_trims_email() {
    let creds = validate_login_input("  ada@example.com ", "pw").unwrap();
    assert_eq!(creds, Credentials::new("ada@example.com", "pw"));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let creds = validate_login_input("ada@example.com", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ada@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn status_label_covers_every_state() {
    assert_eq!(status_label(AuthStatus::Idle), "Signed out");
    assert_eq!(status_label(AuthStatus::Started), "Signing in...");
    assert_eq!(status_label(AuthStatus::Success), "Signed in");
    assert_eq!(status_label(AuthStatus::Error), "Sign-in failed");
}
