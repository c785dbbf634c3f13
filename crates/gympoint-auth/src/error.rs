//! Error type for authentication operations.

use thiserror::Error;

/// Errors produced while hashing passwords or handling tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token signature did not verify.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token is malformed or failed a claim check.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// A signing or verification key could not be parsed.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// A stored password hash is not valid PHC format.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}
