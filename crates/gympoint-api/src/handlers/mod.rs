//! HTTP handlers, one module per resource.

pub mod auth;
pub mod checkins;
pub mod dashboard;
pub mod enrollments;
pub mod health;
pub mod instructors;
pub mod payments;
pub mod profile;
pub mod students;
pub mod subscriptions;
pub mod trainings;

pub use auth::{get_user, login, register, register_student};
pub use checkins::{attendance, check_in};
pub use dashboard::total_students;
pub use enrollments::{enroll, list_enrollments, reconcile_enrollments, unenroll};
pub use health::health;
pub use instructors::{
    create_instructor, delete_instructor, get_instructor, list_instructors, update_instructor,
};
pub use payments::{create_payment, delete_payment, list_payments, payment_summary, update_payment};
pub use profile::get_profile;
pub use students::{delete_student, get_student, list_students, renew_student, update_student};
pub use subscriptions::{
    create_subscription, delete_subscription, get_subscription, list_subscriptions,
    update_subscription,
};
pub use trainings::{
    create_training, delete_training, get_training, list_trainings, update_training,
};
