//! Postgres access layer for the gympoint backend.
//!
//! Owns the connection pool wrapper, the entity models mapped with
//! `sqlx::FromRow`, and the embedded schema migrations. Query logic
//! lives with the services in `gympoint-api`; this crate only describes
//! what the rows look like.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{
    Admin, CheckIn, Enrollment, Instructor, Payment, Student, SubscriptionFee, SubscriptionType,
    Training, User,
};
pub use pool::DbPool;
