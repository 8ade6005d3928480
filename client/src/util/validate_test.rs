use super::*;

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_accepts_complete_form() {
    assert_eq!(validate_sign_up("CoolGamer42", "cool@gamer.gg", "hunter22"), Ok(()));
}

#[test]
fn sign_up_requires_username() {
    let errors = validate_sign_up("   ", "cool@gamer.gg", "hunter22").unwrap_err();
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, None);
}

#[test]
fn sign_up_requires_email() {
    let errors = validate_sign_up("a", "  ", "hunter22").unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
}

#[test]
fn sign_up_rejects_malformed_email() {
    for bad in ["cool", "cool@gamer", "@gamer.gg", "cool@.gg", "cool@gamer.", "cool @gamer.gg"] {
        let errors = validate_sign_up("a", bad, "hunter22").unwrap_err();
        assert_eq!(errors.email, Some("Invalid email format"), "expected rejection for {bad:?}");
    }
}

#[test]
fn sign_up_requires_password() {
    let errors = validate_sign_up("a", "a@b.co", "").unwrap_err();
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn sign_up_rejects_short_password() {
    let errors = validate_sign_up("a", "a@b.co", "1234567").unwrap_err();
    assert_eq!(errors.password, Some("Password must be at least 8 characters"));
    assert_eq!(validate_sign_up("a", "a@b.co", "12345678"), Ok(()));
}

#[test]
fn sign_up_password_length_counts_characters_not_bytes() {
    // Seven characters, more than eight bytes.
    let errors = validate_sign_up("a", "a@b.co", "ééééééé").unwrap_err();
    assert_eq!(errors.password, Some("Password must be at least 8 characters"));
}

#[test]
fn sign_up_reports_all_errors_together() {
    let errors = validate_sign_up("", "nope", "short").unwrap_err();
    assert_eq!(
        errors,
        SignUpErrors {
            username: Some("Username is required"),
            email: Some("Invalid email format"),
            password: Some("Password must be at least 8 characters"),
        }
    );
    assert!(!errors.is_empty());
}

// =============================================================
// Log-in
// =============================================================

#[test]
fn log_in_requires_both_fields() {
    assert_eq!(validate_log_in("", "pw"), Err(LOGIN_MISSING));
    assert_eq!(validate_log_in("  ", "pw"), Err(LOGIN_MISSING));
    assert_eq!(validate_log_in("a@b.co", ""), Err(LOGIN_MISSING));
    assert_eq!(validate_log_in("a@b.co", "pw"), Ok(()));
}

#[test]
fn log_in_does_not_check_email_shape() {
    assert_eq!(validate_log_in("not-an-email", "pw"), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn format_patterns_compile() {
    assert!(EMAIL.is_ok());
    assert!(SERVER_ID.is_ok());
}

#[test]
fn email_shape_rejects_whitespace_around_at() {
    assert!(!looks_like_email("cool @gamer.gg"));
    assert!(!looks_like_email("cool@ gamer.gg"));
    assert!(looks_like_email("a@@b.c"));
}

#[test]
fn email_shape_accepts_common_addresses() {
    for good in ["a@b.co", "first.last@sub.example.org", "x+tag@y.z"] {
        assert!(looks_like_email(good), "expected {good:?} to pass");
    }
}

#[test]
fn email_shape_is_unanchored() {
    assert!(looks_like_email("mail me at a@b.co please"));
}

#[test]
fn email_shape_needs_text_on_both_sides_of_dot() {
    assert!(!looks_like_email("a@.b"));
    assert!(!looks_like_email("a@b."));
    assert!(looks_like_email("a@..b"));
}

// =============================================================
// Discord server id
// =============================================================

#[test]
fn server_id_accepts_17_to_19_digits() {
    assert_eq!(validate_server_id("12345678901234567"), Ok("12345678901234567".to_owned()));
    assert_eq!(validate_server_id("123456789012345678"), Ok("123456789012345678".to_owned()));
    assert_eq!(validate_server_id("1234567890123456789"), Ok("1234567890123456789".to_owned()));
}

#[test]
fn server_id_is_trimmed() {
    assert_eq!(validate_server_id("  123456789012345678\n"), Ok("123456789012345678".to_owned()));
}

#[test]
fn server_id_blank_is_missing() {
    assert_eq!(validate_server_id(""), Err(ServerIdError::Missing));
    assert_eq!(validate_server_id("   "), Err(ServerIdError::Missing));
}

#[test]
fn server_id_wrong_length_or_non_digit_is_format_error() {
    for bad in ["1234567890123456", "12345678901234567890", "12345678901234567a", "1234 5678901234567", "١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦٧"] {
        assert_eq!(validate_server_id(bad), Err(ServerIdError::Format), "expected format error for {bad:?}");
    }
}

#[test]
fn server_id_error_messages() {
    assert_eq!(ServerIdError::Missing.to_string(), "Please enter your Discord Server ID");
    assert_eq!(
        ServerIdError::Format.to_string(),
        "Invalid Server ID format. It should be a 17-19 digit number."
    );
}
