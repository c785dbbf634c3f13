//! Role-shaped profile lookup for the authenticated caller.

use crate::error::ApiError;
use crate::models::{AdminProfile, InstructorProfile, ProfileResponse, StudentProfile};
use crate::principal::AuthPrincipal;
use gympoint_core::Role;
use gympoint_db::{Admin, Instructor, Student, Training};
use sqlx::PgPool;

/// Service resolving a principal to its role-specific profile.
#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    /// Create a new profile service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the caller's profile, shaped by role. Students also get
    /// their enrolled trainings.
    ///
    /// # Errors
    ///
    /// `NotFound` when the role-specific profile row is missing.
    pub async fn profile(&self, principal: &AuthPrincipal) -> Result<ProfileResponse, ApiError> {
        match principal.role {
            Role::Student => {
                let student: Option<Student> =
                    sqlx::query_as("SELECT * FROM students WHERE user_id = $1")
                        .bind(principal.user_id.as_uuid())
                        .fetch_optional(&self.pool)
                        .await?;

                let Some(student) = student else {
                    return Err(ApiError::NotFound("Student profile".to_string()));
                };

                let trainings: Vec<Training> = sqlx::query_as(
                    r"
                    SELECT t.*
                    FROM trainings t
                    JOIN enrollments e ON e.training_id = t.id
                    WHERE e.student_id = $1
                    ORDER BY e.enrolled_at DESC
                    ",
                )
                .bind(student.id)
                .fetch_all(&self.pool)
                .await?;

                Ok(ProfileResponse::Student(StudentProfile {
                    student,
                    trainings,
                    role: Role::Student,
                }))
            }
            Role::Instructor => {
                let instructor: Option<Instructor> =
                    sqlx::query_as("SELECT * FROM instructors WHERE user_id = $1")
                        .bind(principal.user_id.as_uuid())
                        .fetch_optional(&self.pool)
                        .await?;

                instructor
                    .map(|instructor| {
                        ProfileResponse::Instructor(InstructorProfile {
                            instructor,
                            role: Role::Instructor,
                        })
                    })
                    .ok_or_else(|| ApiError::NotFound("Instructor profile".to_string()))
            }
            Role::Admin => {
                // The admin row's id is the user id.
                let admin: Option<Admin> = sqlx::query_as("SELECT * FROM admins WHERE id = $1")
                    .bind(principal.user_id.as_uuid())
                    .fetch_optional(&self.pool)
                    .await?;

                admin
                    .map(|admin| {
                        ProfileResponse::Admin(AdminProfile {
                            admin,
                            role: Role::Admin,
                        })
                    })
                    .ok_or_else(|| ApiError::NotFound("Admin profile".to_string()))
            }
        }
    }
}
