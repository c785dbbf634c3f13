//! The authenticated principal and token signing material.

use gympoint_auth::AuthClaims;
use gympoint_core::{Role, UserId};
use std::sync::Arc;

/// The verified caller identity, built once by the JWT middleware and
/// threaded to handlers through request extensions.
///
/// Handlers never look at raw tokens or claims; this is the only
/// representation of "who is calling" past the middleware boundary.
#[derive(Debug, Clone)]
pub struct AuthPrincipal {
    /// The caller's user ID.
    pub user_id: UserId,
    /// The caller's role.
    pub role: Role,
    /// The caller's email.
    pub email: String,
}

impl AuthPrincipal {
    /// Build a principal from validated claims.
    ///
    /// Returns `None` when the subject is not a UUID, which means the
    /// token was minted with a malformed subject and must be rejected.
    #[must_use]
    pub fn from_claims(claims: &AuthClaims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id()?,
            role: claims.role,
            email: claims.email.clone(),
        })
    }
}

/// Token signing/validation material plus issuance settings.
///
/// Constructed once at startup from configuration and shared through an
/// axum `Extension` layer.
#[derive(Clone)]
pub struct AuthKeys {
    /// PEM-encoded RSA private key used to sign access tokens.
    pub private_key_pem: Arc<String>,
    /// PEM-encoded RSA public key used to validate access tokens.
    pub public_key_pem: Arc<String>,
    /// The `iss` claim stamped on and required from tokens.
    pub issuer: String,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: i64,
}

impl AuthKeys {
    /// Bundle signing material with issuance settings.
    #[must_use]
    pub fn new(private_key_pem: String, public_key_pem: String, issuer: String) -> Self {
        Self {
            private_key_pem: Arc::new(private_key_pem),
            public_key_pem: Arc::new(public_key_pem),
            issuer,
            token_ttl_secs: 24 * 60 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_from_valid_claims() {
        let user_id = UserId::new();
        let claims = AuthClaims::new(user_id, Role::Instructor, "i@gym.test", "gympoint", 60);
        let principal = AuthPrincipal::from_claims(&claims).unwrap();
        assert_eq!(principal.user_id, user_id);
        assert_eq!(principal.role, Role::Instructor);
        assert_eq!(principal.email, "i@gym.test");
    }

    #[test]
    fn malformed_subject_yields_none() {
        let mut claims = AuthClaims::new(UserId::new(), Role::Admin, "a@gym.test", "gympoint", 60);
        claims.sub = "not-a-uuid".to_string();
        assert!(AuthPrincipal::from_claims(&claims).is_none());
    }
}
