use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// `local@domain.tld`: no whitespace or extra `@`, and a dot somewhere after the `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Loose shape check, the confirmation mail is the real verification.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks run before a submission touches the network.
pub fn validate_signup(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::IncompleteFields);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
