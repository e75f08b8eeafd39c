use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::observation_controller::ObservationController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::observation_dto::{
    ObservationByDateQuery, ObservationResponse, UpdateObservationRequest,
    UpsertObservationRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_observation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_by_date))
        .route("/", put(upsert_observation))
        .route("/history", get(history))
        .route("/:id", put(update_observation))
        .route("/:id", delete(delete_observation))
}

async fn get_by_date(
    State(state): State<AppState>,
    Query(query): Query<ObservationByDateQuery>,
) -> Result<Json<Option<ObservationResponse>>, AppError> {
    let controller = ObservationController::new(state.pool.clone());
    let response = controller.get_by_date(query.date).await?;
    Ok(Json(response))
}

async fn history(
    State(state): State<AppState>,
    Query(query): Query<ObservationByDateQuery>,
) -> Result<Json<Vec<ObservationResponse>>, AppError> {
    let controller = ObservationController::new(state.pool.clone());
    let response = controller.history(query.date).await?;
    Ok(Json(response))
}

async fn upsert_observation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpsertObservationRequest>,
) -> Result<Json<ApiResponse<ObservationResponse>>, AppError> {
    let controller = ObservationController::new(state.pool.clone());
    let response = controller.upsert(&user, request).await?;
    Ok(Json(response))
}

async fn update_observation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateObservationRequest>,
) -> Result<Json<ApiResponse<ObservationResponse>>, AppError> {
    let controller = ObservationController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_observation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ObservationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Observação excluída com sucesso!"
    })))
}
