//! Enrollment reconciliation and add-only enrollment.
//!
//! The delta itself is pure ([`enrollment_delta`]); this service only
//! loads the current set and applies the two phases. The insert and
//! delete phases are not wrapped in a transaction: a failure between
//! them leaves the inserts committed, and the step-naming store error
//! tells the caller which phase broke.

use crate::error::ApiError;
use crate::models::{EnrollmentWithTraining, ReconcileResponse};
use gympoint_core::{enrollment_delta, StudentId, TrainingId};
use gympoint_db::Enrollment;
use sqlx::PgPool;
use std::collections::HashSet;

/// Service for enrollment mutations and queries.
#[derive(Clone)]
pub struct EnrollmentService {
    pool: PgPool,
}

impl EnrollmentService {
    /// Create a new enrollment service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Make the student's enrollments match `desired` exactly.
    ///
    /// Computes the minimal delta against the current set, bulk-inserts
    /// the additions, then bulk-deletes the removals. Reconciling twice
    /// with the same target is a no-op the second time.
    ///
    /// # Errors
    ///
    /// `Store` when a phase fails; the message names the phase.
    pub async fn reconcile(
        &self,
        student_id: StudentId,
        desired: &[TrainingId],
    ) -> Result<ReconcileResponse, ApiError> {
        let current = self.current_training_ids(student_id).await?;
        let delta = enrollment_delta(&current, desired);

        let enrollments = if delta.to_add.is_empty() {
            Vec::new()
        } else {
            self.insert_enrollments(student_id, &delta.to_add).await?
        };

        if !delta.to_remove.is_empty() {
            self.delete_enrollments(student_id, &delta.to_remove).await?;
        }

        tracing::info!(
            student_id = %student_id,
            added = delta.to_add.len(),
            removed = delta.to_remove.len(),
            "Enrollments reconciled"
        );

        Ok(ReconcileResponse {
            added: delta.to_add,
            removed: delta.to_remove,
            enrollments,
        })
    }

    /// Enroll the student in the given trainings, skipping any pair
    /// that already exists. Never removes.
    ///
    /// Returns the inserted rows; empty when everything was already
    /// enrolled.
    ///
    /// # Errors
    ///
    /// `Store` when the existing-set load or the insert fails.
    pub async fn enroll(
        &self,
        student_id: StudentId,
        trainings: &[TrainingId],
    ) -> Result<Vec<Enrollment>, ApiError> {
        let current = self.current_training_ids(student_id).await?;
        let delta = enrollment_delta(&current, trainings);

        if delta.to_add.is_empty() {
            return Ok(Vec::new());
        }

        let enrollments = self.insert_enrollments(student_id, &delta.to_add).await?;

        tracing::info!(
            student_id = %student_id,
            added = enrollments.len(),
            "Enrollments created"
        );

        Ok(enrollments)
    }

    /// Remove the given trainings from the student's enrollments.
    ///
    /// # Errors
    ///
    /// `Store` when the delete fails.
    pub async fn unenroll(
        &self,
        student_id: StudentId,
        trainings: &[TrainingId],
    ) -> Result<u64, ApiError> {
        let removed = self.delete_enrollments(student_id, trainings).await?;
        tracing::info!(student_id = %student_id, removed, "Enrollments removed");
        Ok(removed)
    }

    /// List the student's enrollments joined with their trainings,
    /// newest first.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn list(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<EnrollmentWithTraining>, ApiError> {
        sqlx::query_as(
            r"
            SELECT e.id, e.student_id, e.training_id, e.enrolled_at,
                   t.title, t.description, t.instructor_id, t.base_fee
            FROM enrollments e
            JOIN trainings t ON t.id = e.training_id
            WHERE e.student_id = $1
            ORDER BY e.enrolled_at DESC
            ",
        )
        .bind(student_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to fetch enrollments", e))
    }

    async fn current_training_ids(
        &self,
        student_id: StudentId,
    ) -> Result<HashSet<TrainingId>, ApiError> {
        let rows: Vec<(uuid::Uuid,)> =
            sqlx::query_as("SELECT training_id FROM enrollments WHERE student_id = $1")
                .bind(student_id.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to check existing enrollments", e))?;

        Ok(rows
            .into_iter()
            .map(|(id,)| TrainingId::from_uuid(id))
            .collect())
    }

    async fn insert_enrollments(
        &self,
        student_id: StudentId,
        trainings: &[TrainingId],
    ) -> Result<Vec<Enrollment>, ApiError> {
        let training_ids: Vec<uuid::Uuid> =
            trainings.iter().map(|id| id.into_uuid()).collect();

        sqlx::query_as(
            r"
            INSERT INTO enrollments (student_id, training_id)
            SELECT $1, unnest($2::uuid[])
            RETURNING *
            ",
        )
        .bind(student_id.as_uuid())
        .bind(&training_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to enroll trainings", e))
    }

    async fn delete_enrollments(
        &self,
        student_id: StudentId,
        trainings: &[TrainingId],
    ) -> Result<u64, ApiError> {
        let training_ids: Vec<uuid::Uuid> =
            trainings.iter().map(|id| id.into_uuid()).collect();

        let result = sqlx::query(
            "DELETE FROM enrollments WHERE student_id = $1 AND training_id = ANY($2)",
        )
        .bind(student_id.as_uuid())
        .bind(&training_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to unenroll trainings", e))?;

        Ok(result.rows_affected())
    }
}
