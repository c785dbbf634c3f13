//! Response models and query projections for the gympoint API.
//!
//! Projections (`FromRow` structs) mirror the join queries in the
//! services; enriched responses wrap a projection and add the derived
//! fields (expiry notice, age) computed in process.

use chrono::{DateTime, NaiveDate, Utc};
use gympoint_core::{age_on, expiry_notice_on, Role, TrainingId};
use gympoint_db::{Admin, Enrollment, Instructor, Student, Training};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Response for a freshly registered account.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    /// The created user's id.
    pub user_id: uuid::Uuid,

    /// The registered email.
    pub email: String,

    /// The account role.
    pub role: Role,
}

/// Response for a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokenResponse {
    /// Signed RS256 access token.
    pub access_token: String,

    /// The authenticated user's id.
    pub user_id: uuid::Uuid,

    /// The authenticated role.
    pub role: Role,
}

/// A student row joined with its subscription tier details.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentWithSubscription {
    /// Student id.
    pub id: uuid::Uuid,

    /// Backing user account.
    pub user_id: uuid::Uuid,

    /// Given name.
    pub first_name: String,

    /// Middle name, if any.
    pub middle_name: Option<String>,

    /// Family name.
    pub last_name: String,

    /// Contact email.
    pub email: String,

    /// Sex (male/female/other).
    pub sex: String,

    /// Postal address.
    pub address: String,

    /// Date of birth.
    pub birthdate: NaiveDate,

    /// Gym enrollment date.
    pub enrollment_date: NaiveDate,

    /// Selected tier, if any.
    pub subscription_type_id: Option<uuid::Uuid>,

    /// Tier name from the join, if any.
    pub subscription_name: Option<String>,

    /// Tier fee from the join, if any.
    pub subscription_amount: Option<Decimal>,

    /// Subscription validity horizon.
    pub paid_until: Option<NaiveDate>,

    /// Profile picture URL.
    pub picture_url: Option<String>,

    /// Soft-delete flag.
    pub is_active: bool,

    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// A student projection enriched with the expiry-proximity notice.
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    /// The joined student row.
    #[serde(flatten)]
    pub student: StudentWithSubscription,

    /// Notice when `paid_until` is within the warning window or past.
    pub expiry_notice: Option<String>,
}

impl StudentResponse {
    /// Attach the expiry notice evaluated at `today`.
    #[must_use]
    pub fn new(student: StudentWithSubscription, today: NaiveDate) -> Self {
        let expiry_notice = expiry_notice_on(student.paid_until, today);
        Self {
            student,
            expiry_notice,
        }
    }
}

/// An enrollment row joined with its training.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentWithTraining {
    /// Enrollment row id.
    pub id: uuid::Uuid,

    /// The enrolled student.
    pub student_id: uuid::Uuid,

    /// The training enrolled in.
    pub training_id: uuid::Uuid,

    /// When the enrollment was created.
    pub enrolled_at: DateTime<Utc>,

    /// Training title.
    pub title: String,

    /// Training description, if any.
    pub description: Option<String>,

    /// The training's instructor, if assigned.
    pub instructor_id: Option<uuid::Uuid>,

    /// Training base fee.
    pub base_fee: Decimal,
}

/// Result of a full enrollment reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    /// Trainings added by this reconciliation.
    pub added: Vec<TrainingId>,

    /// Trainings removed by this reconciliation.
    pub removed: Vec<TrainingId>,

    /// The rows inserted by this reconciliation.
    pub enrollments: Vec<Enrollment>,
}

/// Aggregated payment figures for a student.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSummaryResponse {
    /// Sum of all recorded amounts.
    pub total: Decimal,

    /// Number of payments.
    pub payment_count: usize,

    /// Total divided by elapsed whole weeks (floor 1).
    pub weekly_average: Decimal,

    /// Total divided by elapsed calendar months (floor 1).
    pub monthly_average: Decimal,
}

/// A check-in row joined with student identity fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRow {
    /// Check-in row id.
    pub id: uuid::Uuid,

    /// The student who checked in.
    pub student_id: uuid::Uuid,

    /// When the student checked in.
    pub checkin_time: DateTime<Utc>,

    /// Row creation time.
    pub created_at: DateTime<Utc>,

    /// Student given name.
    pub first_name: String,

    /// Student family name.
    pub last_name: String,

    /// Student email.
    pub email: String,

    /// Student address.
    pub address: String,

    /// Student date of birth.
    pub birthdate: NaiveDate,
}

/// An attendance row enriched with the student's computed age.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    /// The joined check-in row.
    #[serde(flatten)]
    pub row: AttendanceRow,

    /// Whole years of age at the time of the query.
    pub age: i32,
}

impl AttendanceEntry {
    /// Attach the age evaluated at `today`.
    #[must_use]
    pub fn new(row: AttendanceRow, today: NaiveDate) -> Self {
        let age = age_on(row.birthdate, today);
        Self { row, age }
    }
}

/// A student profile with enrolled trainings.
#[derive(Debug, Clone, Serialize)]
pub struct StudentProfile {
    /// The student row.
    #[serde(flatten)]
    pub student: Student,

    /// Trainings the student is enrolled in.
    pub trainings: Vec<Training>,

    /// Always `student`.
    pub role: Role,
}

/// An instructor profile.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorProfile {
    /// The instructor row.
    #[serde(flatten)]
    pub instructor: Instructor,

    /// Always `instructor`.
    pub role: Role,
}

/// An admin profile.
#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    /// The admin row.
    #[serde(flatten)]
    pub admin: Admin,

    /// Always `admin`.
    pub role: Role,
}

/// The caller's profile, shaped by their role.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    /// Student projection plus enrolled trainings.
    Student(StudentProfile),
    /// Instructor projection.
    Instructor(InstructorProfile),
    /// Admin projection.
    Admin(AdminProfile),
}

/// Dashboard student count, optionally filtered by tier name.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardTotals {
    /// Matching student count.
    pub total_registered: i64,

    /// The tier filter applied, or "all".
    pub filtered_by: String,
}

/// A subscription tier joined with its fee.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubscriptionWithFee {
    /// Tier id.
    pub id: uuid::Uuid,

    /// Tier name.
    pub name: String,

    /// Fee amount; absent when the fee insert failed after the tier
    /// was created.
    pub amount: Option<Decimal>,

    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_projection(paid_until: Option<NaiveDate>) -> StudentWithSubscription {
        StudentWithSubscription {
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
            subscription_name: Some("monthly".to_string()),
            subscription_amount: Some(Decimal::new(7500, 2)),
            paid_until,
            picture_url: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn student_response_attaches_notice_inside_window() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let paid_until = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
        let response = StudentResponse::new(test_projection(Some(paid_until)), today);
        assert_eq!(
            response.expiry_notice.as_deref(),
            Some("Subscription will expire in 5 day(s).")
        );
    }

    #[test]
    fn student_response_flattens_projection_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let response = StudentResponse::new(test_projection(None), today);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["first_name"], "Ana");
        assert_eq!(json["subscription_name"], "monthly");
        assert!(json["expiry_notice"].is_null());
    }

    #[test]
    fn profile_response_serializes_role_per_variant() {
        let profile = ProfileResponse::Instructor(InstructorProfile {
            instructor: Instructor {
                id: uuid::Uuid::new_v4(),
                user_id: uuid::Uuid::new_v4(),
                name: "Coach Kim".to_string(),
                created_at: Utc::now(),
            },
            role: Role::Instructor,
        });
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["role"], "instructor");
        assert_eq!(json["name"], "Coach Kim");
    }

    #[test]
    fn attendance_entry_computes_age() {
        let row = AttendanceRow {
            id: uuid::Uuid::new_v4(),
            student_id: uuid::Uuid::new_v4(),
            checkin_time: Utc::now(),
            created_at: Utc::now(),
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@gym.test".to_string(),
            address: "12 Main St".to_string(),
            birthdate: NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
        };
        let entry = AttendanceEntry::new(row, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        assert_eq!(entry.age, 23);
    }

    #[test]
    fn reconcile_response_lists_changed_training_ids() {
        let added = TrainingId::new();
        let removed = TrainingId::new();
        let response = ReconcileResponse {
            added: vec![added],
            removed: vec![removed],
            enrollments: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["added"][0].as_str(), Some(added.to_string().as_str()));
        assert_eq!(
            json["removed"][0].as_str(),
            Some(removed.to_string().as_str())
        );
    }
}
