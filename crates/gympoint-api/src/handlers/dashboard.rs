//! Dashboard endpoints.

use crate::error::ApiError;
use crate::models::{DashboardQuery, DashboardTotals};
use crate::response::Envelope;
use crate::services::DashboardService;
use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

/// Count registered students, optionally filtered by tier name.
#[utoipa::path(
    get,
    path = "/dashboard/students/total",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Student count fetched"),
    ),
    tag = "Dashboard"
)]
pub async fn total_students(
    Extension(dashboard_service): Extension<Arc<DashboardService>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Envelope<DashboardTotals>>, ApiError> {
    let totals = dashboard_service
        .total_students(query.subscription_type_name.as_deref())
        .await?;

    let message = if totals.total_registered == 0 && totals.filtered_by != "all" {
        "No students found for given subscription type"
    } else {
        "Total registered students fetched successfully"
    };

    Ok(Json(Envelope::ok(message, totals)))
}
