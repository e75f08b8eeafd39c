use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::status_controller::StatusController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::status_dto::{
    CopyPreviousDayRequest, CopyPreviousDayResponse, StatusByDateQuery,
    StatusWithVehicleResponse, UpsertStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_status_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_by_date))
        .route("/", put(upsert_status))
        .route("/copy-previous-day", post(copy_previous_day))
        .route("/:id", delete(delete_status))
}

async fn list_by_date(
    State(state): State<AppState>,
    Query(query): Query<StatusByDateQuery>,
) -> Result<Json<Vec<StatusWithVehicleResponse>>, AppError> {
    let controller = StatusController::new(state.pool.clone());
    let response = controller.list_by_date(query.date).await?;
    Ok(Json(response))
}

async fn upsert_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpsertStatusRequest>,
) -> Result<Json<ApiResponse<StatusWithVehicleResponse>>, AppError> {
    let controller = StatusController::new(state.pool.clone());
    let response = controller.upsert(&user, request).await?;
    Ok(Json(response))
}

async fn copy_previous_day(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CopyPreviousDayRequest>,
) -> Result<Json<ApiResponse<CopyPreviousDayResponse>>, AppError> {
    let controller = StatusController::new(state.pool.clone());
    let response = controller.copy_previous_day(&user, request.date).await?;
    Ok(Json(response))
}

async fn delete_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = StatusController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Registro diário removido com sucesso!"
    })))
}
