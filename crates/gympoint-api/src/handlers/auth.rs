//! Registration, login, and user lookup endpoints.

use crate::error::ApiError;
use crate::models::{
    AuthTokenResponse, LoginRequest, RegisterRequest, RegisterStudentRequest, RegisteredUser,
};
use crate::response::Envelope;
use crate::services::AuthService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::UserId;
use gympoint_db::{Student, User};
use std::sync::Arc;

/// Register a staff user or bare student account.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation error or email in use"),
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Envelope<RegisteredUser>>), ApiError> {
    request.validate()?;
    let user = auth_service.register(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("User registered successfully", user)),
    ))
}

/// Student self-registration: account plus profile.
#[utoipa::path(
    post,
    path = "/auth/registerStudent",
    request_body = RegisterStudentRequest,
    responses(
        (status = 201, description = "Student registered"),
        (status = 400, description = "Validation error or email in use"),
    ),
    tag = "Auth"
)]
pub async fn register_student(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<Envelope<Student>>), ApiError> {
    request.validate()?;
    let student = auth_service.register_student(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Student registered successfully", student)),
    ))
}

/// Authenticate credentials and mint an access token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Envelope<AuthTokenResponse>>, ApiError> {
    request.validate()?;
    let token = auth_service.login(&request).await?;
    Ok(Json(Envelope::ok("Login successful", token)))
}

/// Fetch a user account by id.
#[utoipa::path(
    get,
    path = "/auth/user/{id}",
    responses(
        (status = 200, description = "User retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn get_user(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let user = auth_service.get_user(user_id).await?;
    Ok(Json(Envelope::ok("User retrieved successfully", user)))
}
