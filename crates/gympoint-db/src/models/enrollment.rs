//! Enrollment association entity model.

use chrono::{DateTime, Utc};
use gympoint_core::{StudentId, TrainingId};
use serde::Serialize;
use sqlx::FromRow;

/// An enrollment linking a student to a training.
///
/// The `(student_id, training_id)` pair is unique; the reconciliation
/// engine never inserts a pair that already exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    /// Unique identifier for the enrollment row.
    pub id: uuid::Uuid,

    /// The enrolled student.
    pub student_id: uuid::Uuid,

    /// The training enrolled in.
    pub training_id: uuid::Uuid,

    /// When the enrollment was created.
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// The student side of the pair as a typed ID.
    #[must_use]
    pub fn student_id(&self) -> StudentId {
        StudentId::from_uuid(self.student_id)
    }

    /// The training side of the pair as a typed ID.
    #[must_use]
    pub fn training_id(&self) -> TrainingId {
        TrainingId::from_uuid(self.training_id)
    }
}
