//! Synchronous form validation for the auth and setup screens.
//!
//! Validation never touches the network. A failed check produces a message
//! shown inline next to the field and blocks the submit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Loose and unanchored: surrounding text is tolerated.
static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+"));
static SERVER_ID: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[0-9]{17,19}$"));

/// A pattern that failed to compile matches nothing.
fn pattern_matches(pattern: &LazyLock<Result<Regex, regex::Error>>, input: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(input))
}

pub const LOGIN_MISSING: &str = "Please enter your email and password";

/// Per-field errors from the sign-up form. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Check all sign-up fields at once so every problem is reported together.
///
/// # Errors
///
/// Returns the collected field errors if any field is invalid.
pub fn validate_sign_up(username: &str, email: &str, password: &str) -> Result<(), SignUpErrors> {
    let mut errors = SignUpErrors::default();

    if username.trim().is_empty() {
        errors.username = Some("Username is required");
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !looks_like_email(email) {
        errors.email = Some("Invalid email format");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.password = Some("Password must be at least 8 characters");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Log-in only requires both fields to be present.
///
/// # Errors
///
/// Returns [`LOGIN_MISSING`] when either field is empty.
pub fn validate_log_in(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(LOGIN_MISSING);
    }
    Ok(())
}

/// Email shape check used by sign-up.
pub fn looks_like_email(input: &str) -> bool {
    pattern_matches(&EMAIL, input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServerIdError {
    #[error("Please enter your Discord Server ID")]
    Missing,
    #[error("Invalid Server ID format. It should be a 17-19 digit number.")]
    Format,
}

/// Validate a Discord server (guild) id and return it trimmed.
///
/// # Errors
///
/// [`ServerIdError::Missing`] for blank input, [`ServerIdError::Format`]
/// unless the id is 17 to 19 ASCII digits.
pub fn validate_server_id(raw: &str) -> Result<String, ServerIdError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ServerIdError::Missing);
    }
    if !pattern_matches(&SERVER_ID, id) {
        return Err(ServerIdError::Format);
    }
    Ok(id.to_owned())
}
