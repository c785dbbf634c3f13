//! Request middleware: JWT authentication and role guards.

mod admin_guard;
mod jwt_auth;

pub use admin_guard::admin_guard;
pub use jwt_auth::jwt_auth;
