//! JWT encoding and decoding with the RS256 algorithm.

use crate::claims::AuthClaims;
use crate::error::AuthError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Leeway in seconds for `exp`/`iat` checks (clock skew tolerance).
    pub leeway: u64,
    /// Expected issuer; tokens from any other issuer are rejected when set.
    pub issuer: Option<String>,
    /// Whether to validate expiration.
    pub validate_exp: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            leeway: 60,
            issuer: None,
            validate_exp: true,
        }
    }
}

impl ValidationConfig {
    /// Set the expected issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Disable expiration validation. Test-only escape hatch.
    #[must_use]
    pub fn skip_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }
}

/// Sign claims into a token string using an RSA private key.
///
/// # Errors
///
/// Returns `AuthError::InvalidKey` when the PEM cannot be parsed and
/// `AuthError::InvalidToken` when encoding fails.
pub fn encode_token(claims: &AuthClaims, private_key_pem: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid private key: {e}")))?;

    encode(&Header::new(Algorithm::RS256), claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a token with default validation settings.
///
/// # Errors
///
/// - `AuthError::TokenExpired` when past `exp`
/// - `AuthError::InvalidSignature` when the signature does not verify
/// - `AuthError::InvalidToken` for malformed tokens or claim mismatches
/// - `AuthError::InvalidKey` when the public key PEM is unusable
pub fn decode_token(token: &str, public_key_pem: &[u8]) -> Result<AuthClaims, AuthError> {
    decode_token_with_config(token, public_key_pem, &ValidationConfig::default())
}

/// Decode and validate a token with explicit validation settings.
///
/// Only RS256 is accepted; tokens signed with any other algorithm fail
/// regardless of configuration.
pub fn decode_token_with_config(
    token: &str,
    public_key_pem: &[u8],
    config: &ValidationConfig,
) -> Result<AuthClaims, AuthError> {
    let key = DecodingKey::from_rsa_pem(public_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid public key: {e}")))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.leeway = config.leeway;
    validation.validate_exp = config.validate_exp;
    validation.algorithms = vec![Algorithm::RS256];
    validation.validate_aud = false;

    if let Some(ref iss) = config.issuer {
        validation.set_issuer(&[iss]);
    }

    match decode::<AuthClaims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::InvalidToken(e.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gympoint_core::{Role, UserId};

    const TEST_PRIVATE_KEY: &str = include_str!("../tests/fixtures/test_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../tests/fixtures/test_key.pub.pem");

    fn test_claims() -> AuthClaims {
        AuthClaims::new(UserId::new(), Role::Admin, "a@gym.test", "gympoint", 3600)
    }

    #[test]
    fn encode_decode_round_trip() {
        let claims = test_claims();
        let token = encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let decoded = decode_token(&token, TEST_PUBLIC_KEY.as_bytes()).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = test_claims();
        claims.iat = Utc::now().timestamp() - 7200;
        claims.exp = Utc::now().timestamp() - 3600;

        let token = encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let err = decode_token(&token, TEST_PUBLIC_KEY.as_bytes()).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn expired_token_passes_when_exp_validation_disabled() {
        let mut claims = test_claims();
        claims.iat = Utc::now().timestamp() - 7200;
        claims.exp = Utc::now().timestamp() - 3600;

        let token = encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let config = ValidationConfig::default().skip_exp_validation();
        let decoded =
            decode_token_with_config(&token, TEST_PUBLIC_KEY.as_bytes(), &config).unwrap();
        assert_eq!(decoded.role, Role::Admin);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = encode_token(&test_claims(), TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(decode_token(&tampered, TEST_PUBLIC_KEY.as_bytes()).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = encode_token(&test_claims(), TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let config = ValidationConfig::default().issuer("someone-else");
        let err =
            decode_token_with_config(&token, TEST_PUBLIC_KEY.as_bytes(), &config).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn matching_issuer_is_accepted() {
        let token = encode_token(&test_claims(), TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let config = ValidationConfig::default().issuer("gympoint");
        assert!(decode_token_with_config(&token, TEST_PUBLIC_KEY.as_bytes(), &config).is_ok());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not.a.jwt", TEST_PUBLIC_KEY.as_bytes()).is_err());
    }

    #[test]
    fn bad_key_is_reported() {
        let err = encode_token(&test_claims(), b"not a pem").unwrap_err();
        assert!(matches!(err, AuthError::InvalidKey(_)));
    }
}
