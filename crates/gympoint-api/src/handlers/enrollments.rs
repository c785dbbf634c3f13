//! Enrollment endpoints: reconcile, add-only enroll, unenroll, list.
//!
//! All mutations sit behind the admin guard.

use crate::error::ApiError;
use crate::models::{
    EnrollRequest, EnrollmentWithTraining, ReconcileRequest, ReconcileResponse, UnenrollRequest,
};
use crate::response::Envelope;
use crate::services::EnrollmentService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::StudentId;
use gympoint_db::Enrollment;
use std::sync::Arc;

/// Make a student's enrollments match the request exactly.
#[utoipa::path(
    put,
    path = "/students/{id}/enrollments",
    request_body = ReconcileRequest,
    responses(
        (status = 200, description = "Enrollments reconciled"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Store failure, phase-named"),
    ),
    security(("bearerAuth" = [])),
    tag = "Enrollments"
)]
pub async fn reconcile_enrollments(
    Extension(enrollment_service): Extension<Arc<EnrollmentService>>,
    Path(student_id): Path<StudentId>,
    Json(request): Json<ReconcileRequest>,
) -> Result<Json<Envelope<ReconcileResponse>>, ApiError> {
    request.validate()?;
    let result = enrollment_service
        .reconcile(student_id, &request.trainings)
        .await?;
    Ok(Json(Envelope::ok(
        "Enrollments reconciled successfully",
        result,
    )))
}

/// Enroll a student in trainings, skipping already-enrolled ones.
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrollments created"),
        (status = 200, description = "Nothing new to enroll"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearerAuth" = [])),
    tag = "Enrollments"
)]
pub async fn enroll(
    Extension(enrollment_service): Extension<Arc<EnrollmentService>>,
    Json(request): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<Envelope<Vec<Enrollment>>>), ApiError> {
    request.validate()?;
    let enrollments = enrollment_service
        .enroll(request.student, &request.trainings)
        .await?;

    if enrollments.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(Envelope::ok("No new enrollments to process", enrollments)),
        ));
    }

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Enrollments created successfully", enrollments)),
    ))
}

/// Remove trainings from a student's enrollments.
#[utoipa::path(
    delete,
    path = "/enrollments",
    request_body = UnenrollRequest,
    responses(
        (status = 200, description = "Unenrolled"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearerAuth" = [])),
    tag = "Enrollments"
)]
pub async fn unenroll(
    Extension(enrollment_service): Extension<Arc<EnrollmentService>>,
    Json(request): Json<UnenrollRequest>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiError> {
    request.validate()?;
    let removed = enrollment_service
        .unenroll(request.student, &request.trainings)
        .await?;
    Ok(Json(Envelope::ok(
        "Unenrolled successfully",
        serde_json::json!({ "removed": removed }),
    )))
}

/// List a student's enrollments with their trainings.
#[utoipa::path(
    get,
    path = "/enrollments/{student_id}",
    responses(
        (status = 200, description = "Enrollments fetched"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Enrollments"
)]
pub async fn list_enrollments(
    Extension(enrollment_service): Extension<Arc<EnrollmentService>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Envelope<Vec<EnrollmentWithTraining>>>, ApiError> {
    let enrollments = enrollment_service.list(student_id).await?;
    Ok(Json(Envelope::ok(
        "Enrollments fetched successfully",
        enrollments,
    )))
}
