//! Authentication primitives for the gympoint backend.
//!
//! Token issuance and validation (RS256 JWTs) plus Argon2id password
//! hashing. The API layer consumes this crate through
//! [`AuthClaims`]/[`encode_token`]/[`decode_token`] and
//! [`PasswordHasher`]; no other crate touches credentials directly.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod password;

pub use claims::AuthClaims;
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_with_config, encode_token, ValidationConfig};
pub use password::{hash_password, verify_password, PasswordHasher};
