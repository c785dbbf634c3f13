//! Core types for the gympoint backend.
//!
//! This crate holds the pieces shared by every other crate:
//! strongly typed identifiers, the closed [`Role`] variant, the enrollment
//! reconciliation delta, and the pure subscription-lifecycle calculations
//! (calendar month extension, expiry notices, payment averaging). Nothing
//! in this crate performs I/O.

pub mod ids;
pub mod lifecycle;
pub mod reconcile;
pub mod role;

pub use ids::{
    CheckInId, EnrollmentId, InstructorId, ParseIdError, PaymentId, StudentId,
    SubscriptionTypeId, TrainingId, UserId,
};
pub use lifecycle::{
    age_on, default_paid_until, expiry_notice, expiry_notice_on, extend_by_months,
    payment_averages, renew_paid_until, PaymentAverages,
};
pub use reconcile::{enrollment_delta, EnrollmentDelta};
pub use role::{ParseRoleError, Role};
