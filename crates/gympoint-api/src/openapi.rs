//! OpenAPI document for the gympoint API.

use crate::models::{
    CheckInRequest, CreateInstructorRequest, CreatePaymentRequest, CreateSubscriptionRequest,
    CreateTrainingRequest, EnrollRequest, LoginRequest, ReconcileRequest, RegisterRequest,
    RegisterStudentRequest, RenewRequest, UnenrollRequest, UpdateInstructorRequest,
    UpdatePaymentRequest, UpdateStudentRequest, UpdateSubscriptionRequest, UpdateTrainingRequest,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// The aggregated API documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gympoint API",
        description = "Gym management backend: members, subscriptions, enrollments, payments, and attendance."
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::auth::register,
        crate::handlers::auth::register_student,
        crate::handlers::auth::login,
        crate::handlers::auth::get_user,
        crate::handlers::profile::get_profile,
        crate::handlers::students::list_students,
        crate::handlers::students::get_student,
        crate::handlers::students::update_student,
        crate::handlers::students::delete_student,
        crate::handlers::students::renew_student,
        crate::handlers::enrollments::reconcile_enrollments,
        crate::handlers::enrollments::enroll,
        crate::handlers::enrollments::unenroll,
        crate::handlers::enrollments::list_enrollments,
        crate::handlers::payments::create_payment,
        crate::handlers::payments::list_payments,
        crate::handlers::payments::payment_summary,
        crate::handlers::payments::update_payment,
        crate::handlers::payments::delete_payment,
        crate::handlers::subscriptions::create_subscription,
        crate::handlers::subscriptions::list_subscriptions,
        crate::handlers::subscriptions::get_subscription,
        crate::handlers::subscriptions::update_subscription,
        crate::handlers::subscriptions::delete_subscription,
        crate::handlers::trainings::create_training,
        crate::handlers::trainings::list_trainings,
        crate::handlers::trainings::get_training,
        crate::handlers::trainings::update_training,
        crate::handlers::trainings::delete_training,
        crate::handlers::instructors::create_instructor,
        crate::handlers::instructors::list_instructors,
        crate::handlers::instructors::get_instructor,
        crate::handlers::instructors::update_instructor,
        crate::handlers::instructors::delete_instructor,
        crate::handlers::checkins::check_in,
        crate::handlers::checkins::attendance,
        crate::handlers::dashboard::total_students,
    ),
    components(schemas(
        RegisterRequest,
        RegisterStudentRequest,
        LoginRequest,
        CheckInRequest,
        EnrollRequest,
        ReconcileRequest,
        UnenrollRequest,
        CreatePaymentRequest,
        UpdatePaymentRequest,
        CreateSubscriptionRequest,
        UpdateSubscriptionRequest,
        CreateTrainingRequest,
        UpdateTrainingRequest,
        CreateInstructorRequest,
        UpdateInstructorRequest,
        UpdateStudentRequest,
        RenewRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Students", description = "Member profiles and renewals"),
        (name = "Enrollments", description = "Training enrollment management"),
        (name = "Payments", description = "Payment records and summaries"),
        (name = "Subscriptions", description = "Subscription tiers and fees"),
        (name = "Trainings", description = "Training catalog"),
        (name = "Instructors", description = "Instructor profiles"),
        (name = "CheckIns", description = "Attendance tracking"),
        (name = "Dashboard", description = "Aggregate counts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_and_covers_core_paths() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();
        assert!(paths.contains_key("/auth/login"));
        assert!(paths.contains_key("/students/{id}/enrollments"));
        assert!(paths.contains_key("/payments/{id}/summary"));
        assert!(paths.contains_key("/dashboard/students/total"));
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
