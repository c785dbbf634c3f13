//! Authenticated profile endpoint.

use crate::error::ApiError;
use crate::models::ProfileResponse;
use crate::principal::AuthPrincipal;
use crate::response::Envelope;
use crate::services::ProfileService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Fetch the caller's profile, shaped by role.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Profile retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Profile row missing"),
    ),
    security(("bearerAuth" = [])),
    tag = "Profile"
)]
pub async fn get_profile(
    Extension(profile_service): Extension<Arc<ProfileService>>,
    Extension(principal): Extension<AuthPrincipal>,
) -> Result<Json<Envelope<ProfileResponse>>, ApiError> {
    let profile = profile_service.profile(&principal).await?;
    Ok(Json(Envelope::ok(
        "User profile retrieved successfully",
        profile,
    )))
}
