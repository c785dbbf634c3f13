//! Student profile entity model.

use chrono::{DateTime, NaiveDate, Utc};
use gympoint_core::{age_on, expiry_notice_on, StudentId};
use serde::Serialize;
use sqlx::FromRow;

/// A student profile linked to a user account.
///
/// `paid_until` is the subscription validity horizon; it only moves
/// forward under renewal. Students are soft-deleted via `is_active`,
/// never removed, so payment and check-in history stays intact.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    /// Unique identifier for the student.
    pub id: uuid::Uuid,

    /// The backing user account.
    pub user_id: uuid::Uuid,

    /// Given name.
    pub first_name: String,

    /// Middle name, if any.
    pub middle_name: Option<String>,

    /// Family name.
    pub last_name: String,

    /// Contact email (mirrors the user row; used for check-in lookup).
    pub email: String,

    /// Sex as free-form lowercase text (male/female/other).
    pub sex: String,

    /// Postal address.
    pub address: String,

    /// Date of birth.
    pub birthdate: NaiveDate,

    /// The date the student joined the gym.
    pub enrollment_date: NaiveDate,

    /// Selected subscription tier, if any.
    pub subscription_type_id: Option<uuid::Uuid>,

    /// Subscription validity horizon.
    pub paid_until: Option<NaiveDate>,

    /// Profile picture URL.
    pub picture_url: Option<String>,

    /// Soft-delete flag (false = account closed).
    pub is_active: bool,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// The student ID as a typed [`StudentId`].
    #[must_use]
    pub fn student_id(&self) -> StudentId {
        StudentId::from_uuid(self.id)
    }

    /// "First [Middle] Last" display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Expiry-proximity notice evaluated at `today`.
    #[must_use]
    pub fn expiry_notice_on(&self, today: NaiveDate) -> Option<String> {
        expiry_notice_on(self.paid_until, today)
    }

    /// Whole years of age at `today`.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birthdate, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_student() -> Student {
        Student {
            id: uuid::Uuid::new_v4(),
            user_id: uuid::Uuid::new_v4(),
            first_name: "Ana".to_string(),
            middle_name: None,
            last_name: "Reyes".to_string(),
            email: "ana@gym.test".to_string(),
            sex: "female".to_string(),
            address: "12 Main St".to_string(),
            birthdate: NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            subscription_type_id: None,
            paid_until: Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
            picture_url: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn full_name_skips_missing_middle() {
        let mut student = test_student();
        assert_eq!(student.full_name(), "Ana Reyes");
        student.middle_name = Some("Luz".to_string());
        assert_eq!(student.full_name(), "Ana Luz Reyes");
    }

    #[test]
    fn expiry_notice_delegates_to_lifecycle() {
        let student = test_student();
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(
            student.expiry_notice_on(today).as_deref(),
            Some("Subscription will expire in 3 day(s).")
        );
    }

    #[test]
    fn age_respects_birthday_boundary() {
        let student = test_student();
        assert_eq!(student.age_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
        assert_eq!(student.age_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 24);
    }
}
