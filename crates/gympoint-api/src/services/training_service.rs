//! Training catalog management.

use crate::error::ApiError;
use crate::models::{CreateTrainingRequest, UpdateTrainingRequest};
use gympoint_core::TrainingId;
use gympoint_db::Training;
use sqlx::PgPool;

/// Service for training CRUD.
#[derive(Clone)]
pub struct TrainingService {
    pool: PgPool,
}

impl TrainingService {
    /// Create a new training service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a training.
    ///
    /// # Errors
    ///
    /// `Store` when the insert fails.
    pub async fn create(&self, request: &CreateTrainingRequest) -> Result<Training, ApiError> {
        let training: Training = sqlx::query_as(
            r"
            INSERT INTO trainings (title, description, instructor_id, base_fee)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(request.title.trim())
        .bind(request.description.as_deref())
        .bind(request.instructor_id.map(|id| id.into_uuid()))
        .bind(request.base_fee)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to create training", e))?;

        tracing::info!(training_id = %training.id, title = %training.title, "Training created");
        Ok(training)
    }

    /// List trainings, newest first.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn list(&self) -> Result<Vec<Training>, ApiError> {
        sqlx::query_as("SELECT * FROM trainings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to retrieve trainings", e))
    }

    /// Fetch one training.
    ///
    /// # Errors
    ///
    /// `NotFound` when no training exists with the id.
    pub async fn get(&self, training_id: TrainingId) -> Result<Training, ApiError> {
        sqlx::query_as("SELECT * FROM trainings WHERE id = $1")
            .bind(training_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Training".to_string()))
    }

    /// Apply a partial update to a training.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no training exists with the id
    /// - `Store` when the update fails
    pub async fn update(
        &self,
        training_id: TrainingId,
        request: &UpdateTrainingRequest,
    ) -> Result<Training, ApiError> {
        let training: Option<Training> = sqlx::query_as(
            r"
            UPDATE trainings SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                instructor_id = COALESCE($4, instructor_id),
                base_fee = COALESCE($5, base_fee)
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(training_id.as_uuid())
        .bind(request.title.as_deref().map(str::trim))
        .bind(request.description.as_deref())
        .bind(request.instructor_id.map(|id| id.into_uuid()))
        .bind(request.base_fee)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to update training", e))?;

        training.ok_or_else(|| ApiError::NotFound("Training".to_string()))
    }

    /// Delete a training. Deleting an absent training is a no-op.
    ///
    /// # Errors
    ///
    /// `Store` when the delete fails.
    pub async fn delete(&self, training_id: TrainingId) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM trainings WHERE id = $1")
            .bind(training_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to delete training", e))?;

        Ok(())
    }
}
