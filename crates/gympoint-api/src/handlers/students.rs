//! Student endpoints: listing, lookup, update, soft delete, renewal.

use crate::error::ApiError;
use crate::models::{RenewRequest, StudentResponse, StudentSearchQuery, UpdateStudentRequest};
use crate::response::Envelope;
use crate::services::StudentService;
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use gympoint_core::StudentId;
use gympoint_db::Student;
use std::sync::Arc;

/// List students with subscription details and expiry notices.
#[utoipa::path(
    get,
    path = "/students",
    params(StudentSearchQuery),
    responses(
        (status = 200, description = "Students retrieved"),
    ),
    tag = "Students"
)]
pub async fn list_students(
    Extension(student_service): Extension<Arc<StudentService>>,
    Query(query): Query<StudentSearchQuery>,
) -> Result<Json<Envelope<Vec<StudentResponse>>>, ApiError> {
    let students = student_service.list(query.search.as_deref()).await?;
    Ok(Json(Envelope::ok(
        "Students retrieved successfully",
        students,
    )))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/students/{id}",
    responses(
        (status = 200, description = "Student retrieved"),
        (status = 404, description = "Student not found"),
    ),
    tag = "Students"
)]
pub async fn get_student(
    Extension(student_service): Extension<Arc<StudentService>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Envelope<StudentResponse>>, ApiError> {
    let student = student_service.get(student_id).await?;
    Ok(Json(Envelope::ok("Student retrieved successfully", student)))
}

/// Apply a partial update to a student profile.
#[utoipa::path(
    put,
    path = "/students/{id}",
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Student not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn update_student(
    Extension(student_service): Extension<Arc<StudentService>>,
    Path(student_id): Path<StudentId>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<Envelope<StudentResponse>>, ApiError> {
    request.validate()?;
    let student = student_service.update(student_id, &request).await?;
    Ok(Json(Envelope::ok("Student updated successfully", student)))
}

/// Soft-delete a student.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    responses(
        (status = 200, description = "Student deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Student not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn delete_student(
    Extension(student_service): Extension<Arc<StudentService>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Envelope<()>>, ApiError> {
    student_service.soft_delete(student_id).await?;
    Ok(Json(Envelope::ok_empty("Student deleted successfully")))
}

/// Extend a student's subscription by whole months.
#[utoipa::path(
    post,
    path = "/students/{id}/renew",
    request_body = RenewRequest,
    responses(
        (status = 200, description = "Subscription renewed"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Student not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Students"
)]
pub async fn renew_student(
    Extension(student_service): Extension<Arc<StudentService>>,
    Path(student_id): Path<StudentId>,
    Json(request): Json<RenewRequest>,
) -> Result<Json<Envelope<Student>>, ApiError> {
    request.validate()?;
    let student = student_service.renew(student_id, request.months).await?;
    Ok(Json(Envelope::ok(
        "Subscription renewed successfully",
        student,
    )))
}
