//! Request models for the gympoint API.
//!
//! Each body DTO carries a `validate` method returning the first field
//! failure; handlers call it before touching any service.

use crate::error::ApiError;
use crate::validation::{
    min_len, non_empty, one_of, positive, require, validate_email, validate_password,
};
use chrono::{DateTime, NaiveDate, Utc};
use gympoint_core::{InstructorId, Role, StudentId, SubscriptionTypeId, TrainingId};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Accepted payment methods.
pub const PAYMENT_METHODS: &[&str] = &["cash", "online"];

/// Accepted values for a student's registered sex.
pub const SEX_VALUES: &[&str] = &["male", "female", "other"];

fn default_payment_method() -> String {
    "cash".to_string()
}

/// Request to register a staff user (instructor or admin) or a bare
/// student account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Email address, unique across users.
    pub email: String,

    /// Plaintext password (hashed before storage).
    pub password: String,

    /// Account role.
    #[schema(value_type = String, example = "student")]
    pub role: Role,

    /// Admin display name. Required iff `role` is admin.
    #[serde(default)]
    pub full_name: Option<String>,

    /// Instructor display name. Required iff `role` is instructor.
    #[serde(default)]
    pub name: Option<String>,
}

impl RegisterRequest {
    /// Validate role-conditional fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;

        match self.role {
            Role::Admin => {
                if self.full_name.as_deref().map_or(true, |v| v.trim().is_empty()) {
                    return Err(ApiError::Validation(
                        "full_name is required for admin registration".to_string(),
                    ));
                }
                if self.name.is_some() {
                    return Err(ApiError::Validation(
                        "name is not allowed for admin registration".to_string(),
                    ));
                }
            }
            Role::Instructor => {
                if self.name.as_deref().map_or(true, |v| v.trim().is_empty()) {
                    return Err(ApiError::Validation(
                        "name is required for instructor registration".to_string(),
                    ));
                }
                if self.full_name.is_some() {
                    return Err(ApiError::Validation(
                        "full_name is not allowed for instructor registration".to_string(),
                    ));
                }
            }
            Role::Student => {
                if self.full_name.is_some() || self.name.is_some() {
                    return Err(ApiError::Validation(
                        "full_name and name are not allowed for student registration".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Login credentials.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Registered email address.
    pub email: String,

    /// Plaintext password.
    pub password: String,
}

impl LoginRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when a credential field is blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Student self-registration: creates the user account and the student
/// profile in one request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    /// Email address, unique across users.
    pub email: String,

    /// Plaintext password (hashed before storage).
    pub password: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Optional middle name.
    #[serde(default)]
    pub middle_name: Option<String>,

    /// One of male, female, other.
    pub sex: String,

    /// Mailing address.
    pub address: String,

    /// Date of birth.
    pub birthdate: NaiveDate,

    /// Date the student enrolled at the gym.
    pub enrollment_date: NaiveDate,

    /// Selected subscription tier, if any.
    #[serde(default)]
    #[schema(value_type = Option<uuid::Uuid>)]
    pub subscription_type_id: Option<SubscriptionTypeId>,

    /// Optional profile picture URL.
    #[serde(default)]
    pub picture_url: Option<String>,
}

impl RegisterStudentRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        one_of("sex", &self.sex, SEX_VALUES)?;
        require("address", &self.address)
    }
}

/// Check-in request, keyed by the student's email.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckInRequest {
    /// Email of the checking-in student.
    pub student_email: String,

    /// Override for the check-in timestamp; defaults to now.
    #[serde(default)]
    pub checkin_time: Option<DateTime<Utc>>,
}

impl CheckInRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the email is malformed.
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.student_email)
    }
}

/// Add-only enrollment request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnrollRequest {
    /// The student to enroll.
    #[schema(value_type = uuid::Uuid)]
    pub student: StudentId,

    /// Trainings to add; already-enrolled ones are skipped.
    #[schema(value_type = Vec<uuid::Uuid>)]
    pub trainings: Vec<TrainingId>,
}

impl EnrollRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when `trainings` is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        non_empty("trainings", &self.trainings)
    }
}

/// Full-reconcile request: the student's enrollments are made to match
/// `trainings` exactly.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReconcileRequest {
    /// The complete desired set of training enrollments.
    #[schema(value_type = Vec<uuid::Uuid>)]
    pub trainings: Vec<TrainingId>,
}

impl ReconcileRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when `trainings` is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        non_empty("trainings", &self.trainings)
    }
}

/// Bulk unenrollment request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UnenrollRequest {
    /// The student to unenroll.
    #[schema(value_type = uuid::Uuid)]
    pub student: StudentId,

    /// Trainings to remove.
    #[schema(value_type = Vec<uuid::Uuid>)]
    pub trainings: Vec<TrainingId>,
}

impl UnenrollRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when `trainings` is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        non_empty("trainings", &self.trainings)
    }
}

/// Request to record a payment.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// The paying student.
    #[schema(value_type = uuid::Uuid)]
    pub student_id: StudentId,

    /// Amount tendered.
    pub amount: Decimal,

    /// Free-form payment category (e.g. "subscription", "session").
    pub payment_type: String,

    /// cash or online; defaults to cash.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,

    /// Amount owed; must not exceed `amount`.
    pub amount_to_pay: Decimal,
}

impl CreatePaymentRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        positive("amount", self.amount)?;
        positive("amount_to_pay", self.amount_to_pay)?;
        require("payment_type", &self.payment_type)?;
        one_of("payment_method", &self.payment_method, PAYMENT_METHODS)
    }
}

/// Partial payment update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePaymentRequest {
    /// New tendered amount.
    #[serde(default)]
    pub amount: Option<Decimal>,

    /// New payment method.
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl UpdatePaymentRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(amount) = self.amount {
            positive("amount", amount)?;
        }
        if let Some(method) = &self.payment_method {
            one_of("payment_method", method, PAYMENT_METHODS)?;
        }
        Ok(())
    }
}

/// Request to create a subscription tier with its fee.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSubscriptionRequest {
    /// Tier name, unique.
    pub name: String,

    /// Fee amount.
    pub amount: Decimal,
}

impl CreateSubscriptionRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        min_len("name", &self.name, 3)?;
        positive("amount", self.amount)
    }
}

/// Partial subscription tier update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSubscriptionRequest {
    /// New tier name.
    #[serde(default)]
    pub name: Option<String>,

    /// New fee amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl UpdateSubscriptionRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name {
            min_len("name", name, 3)?;
        }
        if let Some(amount) = self.amount {
            positive("amount", amount)?;
        }
        Ok(())
    }
}

/// Request to create a training.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTrainingRequest {
    /// Training title.
    pub title: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Assigned instructor, if any.
    #[serde(default)]
    #[schema(value_type = Option<uuid::Uuid>)]
    pub instructor_id: Option<InstructorId>,

    /// Base fee charged per enrollment.
    pub base_fee: Decimal,
}

impl CreateTrainingRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        min_len("title", &self.title, 3)?;
        positive("base_fee", self.base_fee)
    }
}

/// Partial training update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTrainingRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,

    /// New description.
    #[serde(default)]
    pub description: Option<String>,

    /// New instructor assignment.
    #[serde(default)]
    #[schema(value_type = Option<uuid::Uuid>)]
    pub instructor_id: Option<InstructorId>,

    /// New base fee.
    #[serde(default)]
    pub base_fee: Option<Decimal>,
}

impl UpdateTrainingRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            min_len("title", title, 3)?;
        }
        if let Some(base_fee) = self.base_fee {
            positive("base_fee", base_fee)?;
        }
        Ok(())
    }
}

/// Request to create an instructor profile for the calling user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInstructorRequest {
    /// Instructor display name.
    pub name: String,
}

impl CreateInstructorRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the name is too short.
    pub fn validate(&self) -> Result<(), ApiError> {
        min_len("name", &self.name, 3)
    }
}

/// Partial instructor update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateInstructorRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateInstructorRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the name is too short.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name {
            min_len("name", name, 3)?;
        }
        Ok(())
    }
}

/// Partial student profile update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// New middle name.
    #[serde(default)]
    pub middle_name: Option<String>,

    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// New sex value.
    #[serde(default)]
    pub sex: Option<String>,

    /// New address.
    #[serde(default)]
    pub address: Option<String>,

    /// New birthdate.
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,

    /// New subscription tier.
    #[serde(default)]
    #[schema(value_type = Option<uuid::Uuid>)]
    pub subscription_type_id: Option<SubscriptionTypeId>,

    /// New profile picture URL.
    #[serde(default)]
    pub picture_url: Option<String>,
}

impl UpdateStudentRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on the first failing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(first_name) = &self.first_name {
            require("first_name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require("last_name", last_name)?;
        }
        if let Some(sex) = &self.sex {
            one_of("sex", sex, SEX_VALUES)?;
        }
        if let Some(address) = &self.address {
            require("address", address)?;
        }
        Ok(())
    }
}

/// Subscription renewal request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RenewRequest {
    /// Whole months to extend `paid_until` by.
    pub months: u32,
}

impl RenewRequest {
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when `months` is zero.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.months == 0 {
            return Err(ApiError::Validation(
                "months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Query parameters for listing students.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct StudentSearchQuery {
    /// Case-insensitive match against first or last name.
    #[serde(default)]
    pub search: Option<String>,
}

/// Query parameters for attendance logs.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Restrict to one student.
    #[serde(default)]
    #[param(value_type = Option<uuid::Uuid>)]
    pub student_id: Option<StudentId>,
}

/// Query parameters for the dashboard student count.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Tier name filter (case-insensitive); absent means all tiers.
    #[serde(default)]
    pub subscription_type_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_request() -> RegisterRequest {
        RegisterRequest {
            email: "admin@gym.test".to_string(),
            password: "secret1".to_string(),
            role: Role::Admin,
            full_name: Some("Grace Hopper".to_string()),
            name: None,
        }
    }

    #[test]
    fn admin_requires_full_name() {
        assert!(admin_request().validate().is_ok());

        let mut request = admin_request();
        request.full_name = None;
        let err = request.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("full_name is required for admin registration"));
    }

    #[test]
    fn instructor_requires_name_and_forbids_full_name() {
        let request = RegisterRequest {
            email: "coach@gym.test".to_string(),
            password: "secret1".to_string(),
            role: Role::Instructor,
            full_name: None,
            name: Some("Coach Kim".to_string()),
        };
        assert!(request.validate().is_ok());

        let mut bad = request.clone();
        bad.name = None;
        assert!(bad.validate().is_err());

        let mut bad = request;
        bad.full_name = Some("Coach Kim".to_string());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn student_register_forbids_staff_names() {
        let request = RegisterRequest {
            email: "kid@gym.test".to_string(),
            password: "secret1".to_string(),
            role: Role::Student,
            full_name: Some("Someone".to_string()),
            name: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn payment_method_defaults_to_cash() {
        let request: CreatePaymentRequest = serde_json::from_value(serde_json::json!({
            "student_id": uuid::Uuid::new_v4(),
            "amount": "100.00",
            "payment_type": "subscription",
            "amount_to_pay": "75.00"
        }))
        .unwrap();
        assert_eq!(request.payment_method, "cash");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn payment_rejects_unknown_method() {
        let request = CreatePaymentRequest {
            student_id: StudentId::new(),
            amount: Decimal::new(10000, 2),
            payment_type: "subscription".to_string(),
            payment_method: "barter".to_string(),
            amount_to_pay: Decimal::new(7500, 2),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn reconcile_rejects_empty_target() {
        let request = ReconcileRequest { trainings: vec![] };
        assert!(request.validate().is_err());
    }

    #[test]
    fn renew_rejects_zero_months() {
        assert!(RenewRequest { months: 0 }.validate().is_err());
        assert!(RenewRequest { months: 1 }.validate().is_ok());
    }

    #[test]
    fn student_registration_checks_sex_values() {
        let request = RegisterStudentRequest {
            email: "s@gym.test".to_string(),
            password: "secret1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            middle_name: None,
            sex: "robot".to_string(),
            address: "12 Main St".to_string(),
            birthdate: NaiveDate::from_ymd_opt(2000, 5, 1).unwrap(),
            enrollment_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            subscription_type_id: None,
            picture_url: None,
        };
        assert!(request.validate().is_err());
    }
}
