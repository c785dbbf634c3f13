//! Request field validation.
//!
//! Small composable checks that each return the first failure as an
//! `ApiError::Validation` carrying a field-level message; request DTOs
//! call them in declaration order so the caller always sees one error
//! at a time.

mod email;

pub use email::validate_email;

use crate::error::ApiError;
use rust_decimal::Decimal;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Require a non-empty (post-trim) string field.
///
/// # Errors
///
/// Returns `ApiError::Validation` naming the field when empty.
pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Require a minimum (post-trim) character count.
///
/// # Errors
///
/// Returns `ApiError::Validation` when shorter than `min`.
pub fn min_len(field: &str, value: &str, min: usize) -> Result<(), ApiError> {
    if value.trim().chars().count() < min {
        return Err(ApiError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Validate a password against the minimum length.
///
/// # Errors
///
/// Returns `ApiError::Validation` when too short.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Require a strictly positive amount.
///
/// # Errors
///
/// Returns `ApiError::Validation` when zero or negative.
pub fn positive(field: &str, amount: Decimal) -> Result<(), ApiError> {
    if amount <= Decimal::ZERO {
        return Err(ApiError::Validation(format!("{field} must be positive")));
    }
    Ok(())
}

/// Require the value to be one of a closed set.
///
/// # Errors
///
/// Returns `ApiError::Validation` listing the allowed values.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), ApiError> {
    if !allowed.contains(&value) {
        return Err(ApiError::Validation(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Require a non-empty list field.
///
/// # Errors
///
/// Returns `ApiError::Validation` when the list is empty.
pub fn non_empty<T>(field: &str, items: &[T]) -> Result<(), ApiError> {
    if items.is_empty() {
        return Err(ApiError::Validation(format!(
            "{field} must contain at least one item"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn require_rejects_blank() {
        assert!(require("address", "12 Main St").is_ok());
        assert_eq!(message(require("address", "   ").unwrap_err()), "address is required");
    }

    #[test]
    fn min_len_counts_chars_after_trim() {
        assert!(min_len("title", "Yoga", 3).is_ok());
        assert!(min_len("title", "  ab  ", 3).is_err());
    }

    #[test]
    fn password_floor_is_six() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(positive("amount", Decimal::new(500, 2)).is_ok());
        assert!(positive("amount", Decimal::ZERO).is_err());
        assert!(positive("amount", Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        assert!(one_of("sex", "female", &["male", "female", "other"]).is_ok());
        let msg = message(one_of("sex", "unknown", &["male", "female", "other"]).unwrap_err());
        assert_eq!(msg, "sex must be one of: male, female, other");
    }

    #[test]
    fn non_empty_rejects_empty_list() {
        assert!(non_empty("trainings", &[1, 2]).is_ok());
        assert!(non_empty::<i32>("trainings", &[]).is_err());
    }
}
