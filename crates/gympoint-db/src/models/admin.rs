//! Admin profile entity model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// An admin profile.
///
/// The admin row's `id` is the backing user's id; admins have no
/// separate profile identifier.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    /// The user id this admin row belongs to.
    pub id: uuid::Uuid,

    /// Full display name.
    pub full_name: String,

    /// Whether this admin holds super-admin privileges.
    pub super_admin: bool,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
