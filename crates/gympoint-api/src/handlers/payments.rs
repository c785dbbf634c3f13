//! Payment endpoints: record, list, summary, update, delete.

use crate::error::ApiError;
use crate::models::{CreatePaymentRequest, PaymentSummaryResponse, UpdatePaymentRequest};
use crate::response::Envelope;
use crate::services::PaymentService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::{PaymentId, StudentId};
use gympoint_db::Payment;
use std::sync::Arc;

/// Record a payment.
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded"),
        (status = 400, description = "Validation error or insufficient payment"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn create_payment(
    Extension(payment_service): Extension<Arc<PaymentService>>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<Envelope<Payment>>), ApiError> {
    request.validate()?;
    let payment = payment_service.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Payment recorded successfully", payment)),
    ))
}

/// List a student's payments, newest first.
#[utoipa::path(
    get,
    path = "/payments/{student_id}",
    responses(
        (status = 200, description = "Payments retrieved"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn list_payments(
    Extension(payment_service): Extension<Arc<PaymentService>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Envelope<Vec<Payment>>>, ApiError> {
    let payments = payment_service.list(student_id).await?;
    Ok(Json(Envelope::ok(
        "Payments retrieved successfully",
        payments,
    )))
}

/// Payment totals and weekly/monthly averages for a student.
#[utoipa::path(
    get,
    path = "/payments/{id}/summary",
    responses(
        (status = 200, description = "Payment summary retrieved"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn payment_summary(
    Extension(payment_service): Extension<Arc<PaymentService>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Envelope<PaymentSummaryResponse>>, ApiError> {
    let summary = payment_service.summary(student_id).await?;
    Ok(Json(Envelope::ok(
        "Payment summary retrieved successfully",
        summary,
    )))
}

/// Apply a partial update to a payment.
#[utoipa::path(
    put,
    path = "/payments/{id}",
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Payment not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn update_payment(
    Extension(payment_service): Extension<Arc<PaymentService>>,
    Path(payment_id): Path<PaymentId>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<Json<Envelope<Payment>>, ApiError> {
    request.validate()?;
    let payment = payment_service.update(payment_id, &request).await?;
    Ok(Json(Envelope::ok("Payment updated successfully", payment)))
}

/// Delete a payment.
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    responses(
        (status = 200, description = "Payment deleted"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn delete_payment(
    Extension(payment_service): Extension<Arc<PaymentService>>,
    Path(payment_id): Path<PaymentId>,
) -> Result<Json<Envelope<()>>, ApiError> {
    payment_service.delete(payment_id).await?;
    Ok(Json(Envelope::ok_empty("Payment deleted successfully")))
}
