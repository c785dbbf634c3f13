//! Subscription tier endpoints.
//!
//! Mutations sit behind the admin guard; reads are public.

use crate::error::ApiError;
use crate::models::{CreateSubscriptionRequest, SubscriptionWithFee, UpdateSubscriptionRequest};
use crate::principal::AuthPrincipal;
use crate::response::Envelope;
use crate::services::SubscriptionService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::SubscriptionTypeId;
use std::sync::Arc;

/// Create a subscription tier with its fee.
#[utoipa::path(
    post,
    path = "/subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription type created"),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Fee insert failed after tier creation"),
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn create_subscription(
    Extension(subscription_service): Extension<Arc<SubscriptionService>>,
    Extension(principal): Extension<AuthPrincipal>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<Envelope<SubscriptionWithFee>>), ApiError> {
    request.validate()?;
    let subscription = subscription_service
        .create(principal.user_id, &request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "Subscription type created successfully",
            subscription,
        )),
    ))
}

/// List all subscription tiers with fees.
#[utoipa::path(
    get,
    path = "/subscriptions",
    responses(
        (status = 200, description = "Subscriptions retrieved"),
    ),
    tag = "Subscriptions"
)]
pub async fn list_subscriptions(
    Extension(subscription_service): Extension<Arc<SubscriptionService>>,
) -> Result<Json<Envelope<Vec<SubscriptionWithFee>>>, ApiError> {
    let subscriptions = subscription_service.list().await?;
    Ok(Json(Envelope::ok(
        "Subscriptions retrieved successfully",
        subscriptions,
    )))
}

/// Fetch one subscription tier.
#[utoipa::path(
    get,
    path = "/subscriptions/{id}",
    responses(
        (status = 200, description = "Subscription retrieved"),
        (status = 404, description = "Subscription not found"),
    ),
    tag = "Subscriptions"
)]
pub async fn get_subscription(
    Extension(subscription_service): Extension<Arc<SubscriptionService>>,
    Path(subscription_type_id): Path<SubscriptionTypeId>,
) -> Result<Json<Envelope<SubscriptionWithFee>>, ApiError> {
    let subscription = subscription_service.get(subscription_type_id).await?;
    Ok(Json(Envelope::ok(
        "Subscription retrieved successfully",
        subscription,
    )))
}

/// Update the tier name and/or fee amount.
#[utoipa::path(
    put,
    path = "/subscriptions/{id}",
    request_body = UpdateSubscriptionRequest,
    responses(
        (status = 200, description = "Subscription updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Subscription not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn update_subscription(
    Extension(subscription_service): Extension<Arc<SubscriptionService>>,
    Path(subscription_type_id): Path<SubscriptionTypeId>,
    Json(request): Json<UpdateSubscriptionRequest>,
) -> Result<Json<Envelope<SubscriptionWithFee>>, ApiError> {
    request.validate()?;
    let subscription = subscription_service
        .update(subscription_type_id, &request)
        .await?;
    Ok(Json(Envelope::ok(
        "Subscription updated successfully",
        subscription,
    )))
}

/// Delete a subscription tier (blocked while referenced).
#[utoipa::path(
    delete,
    path = "/subscriptions/{id}",
    responses(
        (status = 200, description = "Subscription deleted"),
        (status = 400, description = "Tier still referenced by students"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn delete_subscription(
    Extension(subscription_service): Extension<Arc<SubscriptionService>>,
    Path(subscription_type_id): Path<SubscriptionTypeId>,
) -> Result<Json<Envelope<()>>, ApiError> {
    subscription_service.delete(subscription_type_id).await?;
    Ok(Json(Envelope::ok_empty("Subscription deleted successfully")))
}
