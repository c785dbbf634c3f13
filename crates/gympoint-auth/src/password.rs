//! Password hashing with Argon2id.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Argon2id password hasher.
///
/// Uses the OWASP-recommended parameters (m=19456 KiB, t=2, p=1).
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a hasher with the OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These constants are always valid;
        // a failure here is a bug in the argon2 crate, not a runtime
        // condition.
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP Argon2 parameters are valid constants");
        Self { params }
    }

    /// Create a hasher with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` when the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;
        Ok(Self { params })
    }

    /// Hash a plaintext password, returning a PHC-formatted string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored PHC hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` when the stored hash is
    /// not valid PHC format. A non-matching password is `Ok(false)`,
    /// never an error.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }
}

/// Hash a password with the default hasher.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// Verify a password with the default hasher.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    PasswordHasher::new().verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = hash_password("secret-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("correct-password").unwrap();
        assert!(verify_password("correct-password", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("correct-password").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn invalid_hash_format_is_an_error() {
        let result = verify_password("password", "not-a-valid-hash");
        assert!(matches!(result.unwrap_err(), AuthError::InvalidHashFormat));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same-password", &a).unwrap());
        assert!(verify_password("same-password", &b).unwrap());
    }

    #[test]
    fn custom_params_round_trip() {
        // Smaller params keep the test fast.
        let hasher = PasswordHasher::with_params(4096, 1, 1).unwrap();
        let hash = hasher.hash("test-password").unwrap();
        assert!(hasher.verify("test-password", &hash).unwrap());
    }
}
