//! Student listing, lookup, update, soft delete, and renewal.

use crate::error::ApiError;
use crate::models::{StudentResponse, StudentWithSubscription, UpdateStudentRequest};
use chrono::Utc;
use gympoint_core::{renew_paid_until, StudentId};
use gympoint_db::Student;
use sqlx::PgPool;

const STUDENT_WITH_SUBSCRIPTION: &str = r"
    SELECT s.id, s.user_id, s.first_name, s.middle_name, s.last_name,
           s.email, s.sex, s.address, s.birthdate, s.enrollment_date,
           s.subscription_type_id, st.name AS subscription_name,
           sf.amount AS subscription_amount, s.paid_until, s.picture_url,
           s.is_active, s.created_at
    FROM students s
    LEFT JOIN subscription_types st ON st.id = s.subscription_type_id
    LEFT JOIN subscription_fees sf ON sf.subscription_type_id = st.id
";

/// Service for student profile queries and mutations.
#[derive(Clone)]
pub struct StudentService {
    pool: PgPool,
}

impl StudentService {
    /// Create a new student service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active students, newest first, with subscription details
    /// and the expiry notice attached. `search` matches first or last
    /// name case-insensitively.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<StudentResponse>, ApiError> {
        let today = Utc::now().date_naive();

        let students: Vec<StudentWithSubscription> = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let pattern = format!("%{term}%");
                sqlx::query_as(&format!(
                    "{STUDENT_WITH_SUBSCRIPTION}
                     WHERE s.is_active = TRUE
                       AND (s.first_name ILIKE $1 OR s.last_name ILIKE $1)
                     ORDER BY s.created_at DESC"
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "{STUDENT_WITH_SUBSCRIPTION}
                     WHERE s.is_active = TRUE
                     ORDER BY s.created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| ApiError::store("Failed to retrieve students", e))?;

        Ok(students
            .into_iter()
            .map(|student| StudentResponse::new(student, today))
            .collect())
    }

    /// Fetch one student with subscription details and expiry notice.
    ///
    /// # Errors
    ///
    /// `NotFound` when no student exists with the id.
    pub async fn get(&self, student_id: StudentId) -> Result<StudentResponse, ApiError> {
        let student: Option<StudentWithSubscription> =
            sqlx::query_as(&format!("{STUDENT_WITH_SUBSCRIPTION} WHERE s.id = $1"))
                .bind(student_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        student
            .map(|s| StudentResponse::new(s, Utc::now().date_naive()))
            .ok_or_else(|| ApiError::NotFound("Student".to_string()))
    }

    /// Apply a partial update to a student profile.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no student exists with the id
    /// - `Store` when the update fails
    pub async fn update(
        &self,
        student_id: StudentId,
        request: &UpdateStudentRequest,
    ) -> Result<StudentResponse, ApiError> {
        let updated: Option<(uuid::Uuid,)> = sqlx::query_as(
            r"
            UPDATE students SET
                first_name = COALESCE($2, first_name),
                middle_name = COALESCE($3, middle_name),
                last_name = COALESCE($4, last_name),
                sex = COALESCE($5, sex),
                address = COALESCE($6, address),
                birthdate = COALESCE($7, birthdate),
                subscription_type_id = COALESCE($8, subscription_type_id),
                picture_url = COALESCE($9, picture_url)
            WHERE id = $1
            RETURNING id
            ",
        )
        .bind(student_id.as_uuid())
        .bind(request.first_name.as_deref().map(str::trim))
        .bind(request.middle_name.as_deref().map(str::trim))
        .bind(request.last_name.as_deref().map(str::trim))
        .bind(request.sex.as_deref())
        .bind(request.address.as_deref().map(str::trim))
        .bind(request.birthdate)
        .bind(request.subscription_type_id.map(|id| id.into_uuid()))
        .bind(request.picture_url.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to update student", e))?;

        if updated.is_none() {
            return Err(ApiError::NotFound("Student".to_string()));
        }

        self.get(student_id).await
    }

    /// Soft-delete a student (clears `is_active`; history stays).
    ///
    /// # Errors
    ///
    /// - `NotFound` when no student exists with the id
    /// - `Store` when the update fails
    pub async fn soft_delete(&self, student_id: StudentId) -> Result<(), ApiError> {
        let result = sqlx::query("UPDATE students SET is_active = FALSE WHERE id = $1")
            .bind(student_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::store("Failed to delete student", e))?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Student".to_string()));
        }

        tracing::info!(student_id = %student_id, "Student soft-deleted");
        Ok(())
    }

    /// Extend the student's `paid_until` by whole months, from the
    /// later of today and the current horizon (never moves backward).
    ///
    /// # Errors
    ///
    /// - `NotFound` when no student exists with the id
    /// - `Store` when the update fails
    pub async fn renew(&self, student_id: StudentId, months: u32) -> Result<Student, ApiError> {
        let current: Option<(Option<chrono::NaiveDate>,)> =
            sqlx::query_as("SELECT paid_until FROM students WHERE id = $1")
                .bind(student_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        let Some((paid_until,)) = current else {
            return Err(ApiError::NotFound("Student".to_string()));
        };

        let today = Utc::now().date_naive();
        let new_paid_until = renew_paid_until(paid_until, today, months);

        let student: Student =
            sqlx::query_as("UPDATE students SET paid_until = $2 WHERE id = $1 RETURNING *")
                .bind(student_id.as_uuid())
                .bind(new_paid_until)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| ApiError::store("Failed to renew subscription", e))?;

        tracing::info!(
            student_id = %student_id,
            months,
            paid_until = %new_paid_until,
            "Subscription renewed"
        );

        Ok(student)
    }
}
