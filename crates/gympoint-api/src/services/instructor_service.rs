//! Instructor profile management.

use crate::error::ApiError;
use crate::models::{CreateInstructorRequest, UpdateInstructorRequest};
use gympoint_core::{InstructorId, UserId};
use gympoint_db::Instructor;
use sqlx::PgPool;

/// Service for instructor CRUD.
#[derive(Clone)]
pub struct InstructorService {
    pool: PgPool,
}

impl InstructorService {
    /// Create a new instructor service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an instructor profile for the calling user.
    ///
    /// # Errors
    ///
    /// `Store` when the insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        request: &CreateInstructorRequest,
    ) -> Result<Instructor, ApiError> {
        let instructor: Instructor = sqlx::query_as(
            "INSERT INTO instructors (user_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id.as_uuid())
        .bind(request.name.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to create instructor", e))?;

        tracing::info!(instructor_id = %instructor.id, "Instructor created");
        Ok(instructor)
    }

    /// List instructors, newest first.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn list(&self) -> Result<Vec<Instructor>, ApiError> {
        sqlx::query_as("SELECT * FROM instructors ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to fetch instructors", e))
    }

    /// Fetch one instructor.
    ///
    /// # Errors
    ///
    /// `NotFound` when no instructor exists with the id.
    pub async fn get(&self, instructor_id: InstructorId) -> Result<Instructor, ApiError> {
        sqlx::query_as("SELECT * FROM instructors WHERE id = $1")
            .bind(instructor_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Instructor".to_string()))
    }

    /// Apply a partial update to an instructor.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no instructor exists with the id
    /// - `Store` when the update fails
    pub async fn update(
        &self,
        instructor_id: InstructorId,
        request: &UpdateInstructorRequest,
    ) -> Result<Instructor, ApiError> {
        let instructor: Option<Instructor> = sqlx::query_as(
            "UPDATE instructors SET name = COALESCE($2, name) WHERE id = $1 RETURNING *",
        )
        .bind(instructor_id.as_uuid())
        .bind(request.name.as_deref().map(str::trim))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to update instructor", e))?;

        instructor.ok_or_else(|| ApiError::NotFound("Instructor".to_string()))
    }

    /// Delete an instructor. Deleting an absent instructor is a no-op.
    ///
    /// # Errors
    ///
    /// `Store` when the delete fails.
    pub async fn delete(&self, instructor_id: InstructorId) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(instructor_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to delete instructor", e))?;

        Ok(())
    }
}
