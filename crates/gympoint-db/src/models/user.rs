//! User account entity model.

use chrono::{DateTime, Utc};
use gympoint_core::{ParseRoleError, Role, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A user account.
///
/// Every principal (student, instructor, admin) is backed by exactly one
/// user row; the role-specific profile lives in its own table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// Email address (globally unique).
    pub email: String,

    /// Argon2id password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role as stored in the database (lowercase text).
    pub role: String,

    /// Whether the account is active (false = deactivated).
    pub is_active: bool,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The user ID as a typed [`UserId`].
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// The stored role parsed into the closed [`Role`] variant.
    ///
    /// # Errors
    ///
    /// Returns `ParseRoleError` when the column holds an unknown value;
    /// the schema check constraint makes that unreachable in practice.
    pub fn role(&self) -> Result<Role, ParseRoleError> {
        self.role.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: &str) -> User {
        User {
            id: uuid::Uuid::new_v4(),
            email: "member@gym.test".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$dummy$hash".to_string(),
            role: role.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn role_parses_into_variant() {
        assert_eq!(test_user("admin").role().unwrap(), Role::Admin);
        assert_eq!(test_user("student").role().unwrap(), Role::Student);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let json = serde_json::to_value(test_user("student")).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "member@gym.test");
    }
}
