//! Check-in entity model.

use chrono::{DateTime, Utc};
use gympoint_core::CheckInId;
use serde::Serialize;
use sqlx::FromRow;

/// A student check-in at the gym.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckIn {
    /// Unique identifier for the check-in.
    pub id: uuid::Uuid,

    /// The student who checked in.
    pub student_id: uuid::Uuid,

    /// When the student checked in (client-supplied or server now).
    pub checkin_time: DateTime<Utc>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    /// The check-in ID as a typed [`CheckInId`].
    #[must_use]
    pub fn checkin_id(&self) -> CheckInId {
        CheckInId::from_uuid(self.id)
    }
}
