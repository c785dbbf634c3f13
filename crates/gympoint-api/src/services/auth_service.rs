//! Account registration and login.
//!
//! Registration writes the user row first and the role-specific profile
//! second, without a wrapping transaction; a profile failure therefore
//! leaves the user row behind and is reported with a step-naming
//! message.

use crate::error::ApiError;
use crate::models::{
    AuthTokenResponse, LoginRequest, RegisterRequest, RegisterStudentRequest, RegisteredUser,
};
use crate::principal::AuthKeys;
use chrono::Utc;
use gympoint_auth::{encode_token, AuthClaims, PasswordHasher};
use gympoint_core::{default_paid_until, Role, UserId};
use gympoint_db::{Student, User};
use sqlx::PgPool;

/// Service for registration, login, and user lookup.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    password_hasher: PasswordHasher,
    keys: AuthKeys,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub fn new(pool: PgPool, keys: AuthKeys) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
            keys,
        }
    }

    /// Register a staff user (admin/instructor) or a bare student
    /// account, creating the role-specific profile row when the role
    /// carries one.
    ///
    /// # Errors
    ///
    /// - `Rejected` when the email is already registered
    /// - `Internal` when password hashing fails
    /// - `Store` when an insert fails; the message names the failing
    ///   step so a committed user row with a missing profile is
    ///   attributable
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let email = request.email.trim().to_lowercase();
        self.ensure_email_free(&email).await?;

        let password_hash = self
            .password_hasher
            .hash(&request.password)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(request.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to create user", e))?;

        match request.role {
            Role::Admin => {
                let full_name = request.full_name.as_deref().unwrap_or_default().trim();
                sqlx::query("INSERT INTO admins (id, full_name) VALUES ($1, $2)")
                    .bind(user.id)
                    .bind(full_name)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        ApiError::store("User created, but failed to create admin profile", e)
                    })?;
            }
            Role::Instructor => {
                let name = request.name.as_deref().unwrap_or_default().trim();
                sqlx::query("INSERT INTO instructors (user_id, name) VALUES ($1, $2)")
                    .bind(user.id)
                    .bind(name)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| {
                        ApiError::store("User created, but failed to create instructor profile", e)
                    })?;
            }
            // Bare account; the student profile comes from the
            // dedicated student registration endpoint.
            Role::Student => {}
        }

        tracing::info!(user_id = %user.id, role = %request.role, "User registered");

        Ok(RegisteredUser {
            user_id: user.id,
            email: user.email,
            role: request.role,
        })
    }

    /// Register a student: user account plus student profile, with
    /// `paid_until` defaulting to 30 days past registration.
    ///
    /// # Errors
    ///
    /// - `Rejected` when the email is already registered
    /// - `Store` when an insert fails, step-named as in [`register`]
    ///
    /// [`register`]: AuthService::register
    pub async fn register_student(
        &self,
        request: &RegisterStudentRequest,
    ) -> Result<Student, ApiError> {
        let email = request.email.trim().to_lowercase();
        self.ensure_email_free(&email).await?;

        let password_hash = self
            .password_hasher
            .hash(&request.password)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, 'student') RETURNING *",
        )
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("Failed to create user", e))?;

        let paid_until = default_paid_until(Utc::now().date_naive());

        let student: Student = sqlx::query_as(
            r"
            INSERT INTO students (
                user_id, first_name, middle_name, last_name, email, sex,
                address, birthdate, enrollment_date, subscription_type_id,
                paid_until, picture_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            ",
        )
        .bind(user.id)
        .bind(request.first_name.trim())
        .bind(request.middle_name.as_deref().filter(|m| !m.trim().is_empty()))
        .bind(request.last_name.trim())
        .bind(&email)
        .bind(&request.sex)
        .bind(request.address.trim())
        .bind(request.birthdate)
        .bind(request.enrollment_date)
        .bind(request.subscription_type_id.map(|id| id.into_uuid()))
        .bind(paid_until)
        .bind(request.picture_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ApiError::store("User created, but failed to create student profile", e))?;

        tracing::info!(user_id = %user.id, student_id = %student.id, "Student registered");

        Ok(student)
    }

    /// Authenticate credentials and mint an access token.
    ///
    /// # Errors
    ///
    /// `Unauthorized` with a credential-neutral message on unknown
    /// email, wrong password, or a deactivated account.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthTokenResponse, ApiError> {
        let email = request.email.trim().to_lowercase();

        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        };

        let verified = self
            .password_hasher
            .verify(&request.password, &user.password_hash)
            .map_err(|e| ApiError::Internal(format!("Password verification failed: {e}")))?;

        if !verified || !user.is_active {
            return Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let role = user
            .role()
            .map_err(|e| ApiError::Internal(format!("Stored role is invalid: {e}")))?;

        let claims = AuthClaims::new(
            user.user_id(),
            role,
            &user.email,
            self.keys.issuer.clone(),
            self.keys.token_ttl_secs,
        );
        let access_token = encode_token(&claims, self.keys.private_key_pem.as_bytes())
            .map_err(|e| ApiError::Internal(format!("Token signing failed: {e}")))?;

        tracing::info!(user_id = %user.id, role = %role, "User logged in");

        Ok(AuthTokenResponse {
            access_token,
            user_id: user.id,
            role,
        })
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when no user exists with the id.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, ApiError> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("User".to_string()))
    }

    async fn ensure_email_free(&self, email: &str) -> Result<(), ApiError> {
        let existing: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Err(ApiError::rejected(
                "Email already registered",
                format!("The email \"{email}\" is already in use."),
            ));
        }
        Ok(())
    }
}
