//! Entity models mapped from database rows.

mod admin;
mod checkin;
mod enrollment;
mod instructor;
mod payment;
mod student;
mod subscription;
mod training;
mod user;

pub use admin::Admin;
pub use checkin::CheckIn;
pub use enrollment::Enrollment;
pub use instructor::Instructor;
pub use payment::Payment;
pub use student::Student;
pub use subscription::{SubscriptionFee, SubscriptionType};
pub use training::Training;
pub use user::User;
