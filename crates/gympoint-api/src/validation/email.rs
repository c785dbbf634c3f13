//! Email format validation.

use crate::error::ApiError;
use std::sync::LazyLock;

/// Pragmatic email pattern: dot-separated local part, at least one
/// domain label plus TLD. Intentionally looser than full RFC 5322.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$",
    )
    .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Maximum allowed email length (per RFC 5321).
const MAX_EMAIL_LENGTH: usize = 254;

/// Validate an email address.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the email is empty, too long, or
/// not a plausible address.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ApiError::Validation(format!(
            "email must not exceed {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ApiError::Validation(
            "email must be a valid email address".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user+tag@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@localhost").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(validate_email("  user@example.com  ").is_ok());
    }
}
