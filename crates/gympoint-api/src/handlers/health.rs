//! Liveness endpoint.

use crate::response::Envelope;
use axum::Json;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up"),
    ),
    tag = "Health"
)]
pub async fn health() -> Json<Envelope<()>> {
    Json(Envelope::ok_empty("OK"))
}
