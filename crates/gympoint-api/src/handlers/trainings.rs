//! Training catalog endpoints.

use crate::error::ApiError;
use crate::models::{CreateTrainingRequest, UpdateTrainingRequest};
use crate::response::Envelope;
use crate::services::TrainingService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use gympoint_core::TrainingId;
use gympoint_db::Training;
use std::sync::Arc;

/// Create a training.
#[utoipa::path(
    post,
    path = "/trainings",
    request_body = CreateTrainingRequest,
    responses(
        (status = 201, description = "Training created"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Trainings"
)]
pub async fn create_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Json(request): Json<CreateTrainingRequest>,
) -> Result<(StatusCode, Json<Envelope<Training>>), ApiError> {
    request.validate()?;
    let training = training_service.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Training created successfully", training)),
    ))
}

/// List trainings, newest first.
#[utoipa::path(
    get,
    path = "/trainings",
    responses(
        (status = 200, description = "Trainings retrieved"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Trainings"
)]
pub async fn list_trainings(
    Extension(training_service): Extension<Arc<TrainingService>>,
) -> Result<Json<Envelope<Vec<Training>>>, ApiError> {
    let trainings = training_service.list().await?;
    Ok(Json(Envelope::ok(
        "Trainings retrieved successfully",
        trainings,
    )))
}

/// Fetch one training.
#[utoipa::path(
    get,
    path = "/trainings/{id}",
    responses(
        (status = 200, description = "Training retrieved"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Training not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Trainings"
)]
pub async fn get_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Path(training_id): Path<TrainingId>,
) -> Result<Json<Envelope<Training>>, ApiError> {
    let training = training_service.get(training_id).await?;
    Ok(Json(Envelope::ok(
        "Training retrieved successfully",
        training,
    )))
}

/// Apply a partial update to a training.
#[utoipa::path(
    put,
    path = "/trainings/{id}",
    request_body = UpdateTrainingRequest,
    responses(
        (status = 200, description = "Training updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Training not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Trainings"
)]
pub async fn update_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Path(training_id): Path<TrainingId>,
    Json(request): Json<UpdateTrainingRequest>,
) -> Result<Json<Envelope<Training>>, ApiError> {
    request.validate()?;
    let training = training_service.update(training_id, &request).await?;
    Ok(Json(Envelope::ok("Training updated successfully", training)))
}

/// Delete a training.
#[utoipa::path(
    delete,
    path = "/trainings/{id}",
    responses(
        (status = 200, description = "Training deleted"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Trainings"
)]
pub async fn delete_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Path(training_id): Path<TrainingId>,
) -> Result<Json<Envelope<()>>, ApiError> {
    training_service.delete(training_id).await?;
    Ok(Json(Envelope::ok_empty("Training deleted successfully")))
}
