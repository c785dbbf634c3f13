//! Check-in and attendance endpoints.

use crate::error::ApiError;
use crate::models::{AttendanceEntry, AttendanceQuery, CheckInRequest};
use crate::response::Envelope;
use crate::services::CheckInService;
use axum::{extract::Query, http::StatusCode, Extension, Json};
use gympoint_db::CheckIn;
use std::sync::Arc;

/// Record a check-in for the student identified by email.
#[utoipa::path(
    post,
    path = "/checkIn",
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Check-in recorded"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "User is not a student"),
        (status = 404, description = "User or student profile not found"),
    ),
    tag = "CheckIns"
)]
pub async fn check_in(
    Extension(checkin_service): Extension<Arc<CheckInService>>,
    Json(request): Json<CheckInRequest>,
) -> Result<(StatusCode, Json<Envelope<CheckIn>>), ApiError> {
    request.validate()?;
    let checkin = checkin_service.check_in(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Check-in successful", checkin)),
    ))
}

/// Attendance logs, optionally scoped to one student.
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance logs retrieved"),
    ),
    tag = "CheckIns"
)]
pub async fn attendance(
    Extension(checkin_service): Extension<Arc<CheckInService>>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Envelope<Vec<AttendanceEntry>>>, ApiError> {
    let logs = checkin_service.attendance(query.student_id).await?;
    Ok(Json(Envelope::ok(
        "Attendance logs retrieved successfully",
        logs,
    )))
}
