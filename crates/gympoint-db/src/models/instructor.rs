//! Instructor profile entity model.

use chrono::{DateTime, Utc};
use gympoint_core::InstructorId;
use serde::Serialize;
use sqlx::FromRow;

/// An instructor profile linked to a user account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instructor {
    /// Unique identifier for the instructor.
    pub id: uuid::Uuid,

    /// The backing user account.
    pub user_id: uuid::Uuid,

    /// Display name.
    pub name: String,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Instructor {
    /// The instructor ID as a typed [`InstructorId`].
    #[must_use]
    pub fn instructor_id(&self) -> InstructorId {
        InstructorId::from_uuid(self.id)
    }
}
