//! Check-in recording and attendance logs.

use crate::error::ApiError;
use crate::models::{AttendanceEntry, AttendanceRow, CheckInRequest};
use chrono::Utc;
use gympoint_core::{Role, StudentId};
use gympoint_db::CheckIn;
use sqlx::PgPool;

/// Service for check-ins and attendance queries.
#[derive(Clone)]
pub struct CheckInService {
    pool: PgPool,
}

impl CheckInService {
    /// Create a new check-in service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a check-in for the student identified by email.
    ///
    /// The email must belong to an existing user, the user must be a
    /// student, and the student profile must exist.
    ///
    /// # Errors
    ///
    /// - `NotFound("User")` when no user carries the email
    /// - `Forbidden` when the user is not a student
    /// - `NotFound("Student profile")` when the profile row is missing
    /// - `Store` when the insert fails
    pub async fn check_in(&self, request: &CheckInRequest) -> Result<CheckIn, ApiError> {
        let email = request.student_email.trim().to_lowercase();

        let user: Option<(uuid::Uuid, String)> =
            sqlx::query_as("SELECT id, role FROM users WHERE email = $1")
                .bind(&email)
                .fetch_optional(&self.pool)
                .await?;

        let Some((user_id, role)) = user else {
            return Err(ApiError::NotFound("User".to_string()));
        };

        if role.parse::<Role>() != Ok(Role::Student) {
            return Err(ApiError::Forbidden(
                "Only students are allowed to check in".to_string(),
            ));
        }

        let student: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM students WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        let Some((student_id,)) = student else {
            return Err(ApiError::NotFound("Student profile".to_string()));
        };

        let checkin: CheckIn = sqlx::query_as(
            r"
            INSERT INTO student_checkins (student_id, checkin_time)
            VALUES ($1, COALESCE($2, now()))
            RETURNING *
            ",
        )
        .bind(student_id)
        .bind(request.checkin_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to record check-in", e))?;

        tracing::info!(student_id = %student_id, checkin_time = %checkin.checkin_time, "Check-in recorded");
        Ok(checkin)
    }

    /// Attendance logs joined with student identity and enriched with
    /// the computed age, newest first. Optionally scoped to one
    /// student.
    ///
    /// # Errors
    ///
    /// `Store` when the query fails.
    pub async fn attendance(
        &self,
        student_id: Option<StudentId>,
    ) -> Result<Vec<AttendanceEntry>, ApiError> {
        const BASE: &str = r"
            SELECT c.id, c.student_id, c.checkin_time, c.created_at,
                   s.first_name, s.last_name, s.email, s.address, s.birthdate
            FROM student_checkins c
            JOIN students s ON s.id = c.student_id
        ";

        let rows: Vec<AttendanceRow> = match student_id {
            Some(id) => {
                sqlx::query_as(&format!(
                    "{BASE} WHERE c.student_id = $1 ORDER BY c.checkin_time DESC"
                ))
                .bind(id.as_uuid())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!("{BASE} ORDER BY c.checkin_time DESC"))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| ApiError::store("Failed to retrieve attendance logs", e))?;

        let today = Utc::now().date_naive();
        Ok(rows
            .into_iter()
            .map(|row| AttendanceEntry::new(row, today))
            .collect())
    }
}
