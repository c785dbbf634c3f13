//! The closed set of principal roles.
//!
//! Roles are stored as lowercase text in the database and in JWT claims;
//! all in-process dispatch happens over this variant rather than raw
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A principal's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A gym member with a subscription and enrollments.
    Student,
    /// A staff member who runs trainings.
    Instructor,
    /// An administrator; the only role allowed to mutate enrollments
    /// and subscription tiers.
    Admin,
}

/// Error returned when a role string is not one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl Role {
    /// The lowercase wire/database representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may perform admin-only operations.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("STUDENT".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("instructor".parse::<Role>().unwrap(), Role::Instructor);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "janitor".parse::<Role>().unwrap_err();
        assert_eq!(err.0, "janitor");
    }

    #[test]
    fn display_round_trips() {
        for role in [Role::Student, Role::Instructor, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Student.is_admin());
        assert!(!Role::Instructor.is_admin());
    }
}
