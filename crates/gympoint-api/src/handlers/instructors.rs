//! Instructor endpoints.

use crate::error::ApiError;
use crate::models::{CreateInstructorRequest, UpdateInstructorRequest};
use crate::principal::AuthPrincipal;
use crate::response::Envelope;
use crate::services::InstructorService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::InstructorId;
use gympoint_db::Instructor;
use std::sync::Arc;

/// Create an instructor profile for the calling user.
#[utoipa::path(
    post,
    path = "/instructors",
    request_body = CreateInstructorRequest,
    responses(
        (status = 201, description = "Instructor created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Instructors"
)]
pub async fn create_instructor(
    Extension(instructor_service): Extension<Arc<InstructorService>>,
    Extension(principal): Extension<AuthPrincipal>,
    Json(request): Json<CreateInstructorRequest>,
) -> Result<(StatusCode, Json<Envelope<Instructor>>), ApiError> {
    request.validate()?;
    let instructor = instructor_service
        .create(principal.user_id, &request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Instructor created successfully", instructor)),
    ))
}

/// List instructors, newest first.
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "Instructors fetched"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Instructors"
)]
pub async fn list_instructors(
    Extension(instructor_service): Extension<Arc<InstructorService>>,
) -> Result<Json<Envelope<Vec<Instructor>>>, ApiError> {
    let instructors = instructor_service.list().await?;
    Ok(Json(Envelope::ok(
        "Instructors fetched successfully",
        instructors,
    )))
}

/// Fetch one instructor.
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    responses(
        (status = 200, description = "Instructor fetched"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Instructor not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Instructors"
)]
pub async fn get_instructor(
    Extension(instructor_service): Extension<Arc<InstructorService>>,
    Path(instructor_id): Path<InstructorId>,
) -> Result<Json<Envelope<Instructor>>, ApiError> {
    let instructor = instructor_service.get(instructor_id).await?;
    Ok(Json(Envelope::ok(
        "Instructor fetched successfully",
        instructor,
    )))
}

/// Apply a partial update to an instructor.
#[utoipa::path(
    put,
    path = "/instructors/{id}",
    request_body = UpdateInstructorRequest,
    responses(
        (status = 200, description = "Instructor updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Instructor not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Instructors"
)]
pub async fn update_instructor(
    Extension(instructor_service): Extension<Arc<InstructorService>>,
    Path(instructor_id): Path<InstructorId>,
    Json(request): Json<UpdateInstructorRequest>,
) -> Result<Json<Envelope<Instructor>>, ApiError> {
    request.validate()?;
    let instructor = instructor_service.update(instructor_id, &request).await?;
    Ok(Json(Envelope::ok(
        "Instructor updated successfully",
        instructor,
    )))
}

/// Delete an instructor.
#[utoipa::path(
    delete,
    path = "/instructors/{id}",
    responses(
        (status = 200, description = "Instructor deleted"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Instructors"
)]
pub async fn delete_instructor(
    Extension(instructor_service): Extension<Arc<InstructorService>>,
    Path(instructor_id): Path<InstructorId>,
) -> Result<Json<Envelope<()>>, ApiError> {
    instructor_service.delete(instructor_id).await?;
    Ok(Json(Envelope::ok_empty("Instructor deleted successfully")))
}
