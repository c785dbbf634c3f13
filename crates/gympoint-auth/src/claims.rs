//! JWT claims carried by gympoint access tokens.

use chrono::Utc;
use gympoint_core::{Role, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every gympoint access token.
///
/// Standard RFC 7519 claims (`sub`, `iss`, `exp`, `iat`, `jti`) plus the
/// two custom claims the backend dispatches on: the caller's [`Role`]
/// and email. The role travels as lowercase text on the wire and is
/// deserialized straight into the closed variant, so an unknown role
/// string fails token decoding rather than reaching a handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthClaims {
    /// Subject: the user's ID.
    pub sub: String,

    /// Issuer of the token.
    pub iss: String,

    /// Expiration time as a Unix timestamp.
    pub exp: i64,

    /// Issued-at as a Unix timestamp.
    pub iat: i64,

    /// Unique token identifier.
    pub jti: String,

    /// The caller's role.
    pub role: Role,

    /// The caller's email address.
    pub email: String,
}

impl AuthClaims {
    /// Build claims for a freshly authenticated user.
    ///
    /// `ttl_secs` controls the `exp` offset from now.
    #[must_use]
    pub fn new(
        user_id: UserId,
        role: Role,
        email: impl Into<String>,
        issuer: impl Into<String>,
        ttl_secs: i64,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            iss: issuer.into(),
            exp: now + ttl_secs,
            iat: now,
            jti: Uuid::new_v4().to_string(),
            role,
            email: email.into(),
        }
    }

    /// Whether the token's expiry lies in the past.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// The subject parsed back into a typed [`UserId`].
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_claims_carry_subject_and_role() {
        let user_id = UserId::new();
        let claims = AuthClaims::new(user_id, Role::Admin, "a@gym.test", "gympoint", 3600);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id(), Some(user_id));
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iss, "gympoint");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_claims_report_expired() {
        let mut claims =
            AuthClaims::new(UserId::new(), Role::Student, "s@gym.test", "gympoint", 3600);
        claims.exp = Utc::now().timestamp() - 10;
        assert!(claims.is_expired());
    }

    #[test]
    fn jti_is_unique_per_token() {
        let a = AuthClaims::new(UserId::new(), Role::Student, "s@gym.test", "gympoint", 60);
        let b = AuthClaims::new(UserId::new(), Role::Student, "s@gym.test", "gympoint", 60);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn role_serializes_lowercase() {
        let claims =
            AuthClaims::new(UserId::new(), Role::Instructor, "i@gym.test", "gympoint", 60);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["role"], "instructor");
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        let json = r#"{
            "sub": "00000000-0000-0000-0000-000000000000",
            "iss": "gympoint", "exp": 0, "iat": 0, "jti": "x",
            "role": "janitor", "email": "j@gym.test"
        }"#;
        assert!(serde_json::from_str::<AuthClaims>(json).is_err());
    }
}
