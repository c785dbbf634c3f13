//! Error type for the HTTP surface.
//!
//! Every error renders as the JSON envelope with `success: false`:
//! 400 validation/rejection, 401 unauthenticated, 403 missing role,
//! 404 not found, 500 store/internal.
//! Store error messages pass through verbatim in the `error` field.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error type for all gympoint endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input failed schema validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Missing or invalid credentials/token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but lacking the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A referenced entity does not exist. Carries the resource name.
    #[error("{0} not found")]
    NotFound(String),

    /// Domain rule rejected the request with a caller-facing message.
    /// Used for e.g. insufficient payment or a duplicate tier name.
    #[error("{message}")]
    Rejected {
        /// Envelope message.
        message: String,
        /// Envelope error detail.
        detail: String,
    },

    /// A store operation failed; `message` names the failing step so a
    /// partial application (one phase committed, the next failed) is
    /// attributable.
    #[error("{message}: {source}")]
    Store {
        /// Envelope message naming the failing step.
        message: String,
        /// The underlying database error, passed through verbatim.
        #[source]
        source: sqlx::Error,
    },

    /// A database error with no step-specific message.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Attach a step-naming message to a store failure.
    #[must_use]
    pub fn store(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }

    /// Reject with a caller-facing message and detail (HTTP 400).
    #[must_use]
    pub fn rejected(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope): (StatusCode, Envelope<()>) = match self {
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                Envelope::err("Validation failed", detail),
            ),
            ApiError::Unauthorized(detail) => (
                StatusCode::UNAUTHORIZED,
                Envelope::err("Unauthorized", detail),
            ),
            ApiError::Forbidden(detail) => {
                (StatusCode::FORBIDDEN, Envelope::err("Forbidden", detail))
            }
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Envelope::err(format!("{resource} not found"), String::new()),
            ),
            ApiError::Rejected { message, detail } => {
                (StatusCode::BAD_REQUEST, Envelope::err(message, detail))
            }
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, step = %message, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::err(message, source.to_string()),
                )
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::err("Database error", e.to_string()),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::err("Internal server error", detail),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_step_message() {
        let err = ApiError::store("Failed to enroll trainings", sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Failed to enroll trainings"));
    }

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::Validation("trainings must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = ApiError::Unauthorized("Missing token".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = ApiError::Forbidden("Only admins can enroll students".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Student".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let response =
            ApiError::store("Failed to create payment", sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
