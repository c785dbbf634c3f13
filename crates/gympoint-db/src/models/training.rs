//! Training (course/class offering) entity model.

use chrono::{DateTime, Utc};
use gympoint_core::TrainingId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A training offered by the gym.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Training {
    /// Unique identifier for the training.
    pub id: uuid::Uuid,

    /// Title shown to members.
    pub title: String,

    /// Longer description, if any.
    pub description: Option<String>,

    /// The instructor running the training, if assigned.
    pub instructor_id: Option<uuid::Uuid>,

    /// Base fee charged for the training.
    pub base_fee: Decimal,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Training {
    /// The training ID as a typed [`TrainingId`].
    #[must_use]
    pub fn training_id(&self) -> TrainingId {
        TrainingId::from_uuid(self.id)
    }
}
