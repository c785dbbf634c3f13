//! Business-logic services.
//!
//! Each service is a cheap-to-clone handle over the shared `PgPool`;
//! handlers stay thin and every query lives here.

mod auth_service;
mod checkin_service;
mod dashboard_service;
mod enrollment_service;
mod instructor_service;
mod payment_service;
mod profile_service;
mod student_service;
mod subscription_service;
mod training_service;

pub use auth_service::AuthService;
pub use checkin_service::CheckInService;
pub use dashboard_service::DashboardService;
pub use enrollment_service::EnrollmentService;
pub use instructor_service::InstructorService;
pub use payment_service::PaymentService;
pub use profile_service::ProfileService;
pub use student_service::StudentService;
pub use subscription_service::SubscriptionService;
pub use training_service::TrainingService;
