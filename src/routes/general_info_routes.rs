use axum::{
    extract::{Query, State},
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::general_info_controller::GeneralInfoController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::general_info_dto::{
    GeneralInfoByDateQuery, GeneralInfoResponse, UpsertGeneralInfoRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_general_info_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_by_date))
        .route("/", put(upsert_general_info))
}

async fn get_by_date(
    State(state): State<AppState>,
    Query(query): Query<GeneralInfoByDateQuery>,
) -> Result<Json<GeneralInfoResponse>, AppError> {
    let controller = GeneralInfoController::new(state.pool.clone());
    let response = controller.get_by_date(query.date).await?;
    Ok(Json(response))
}

async fn upsert_general_info(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpsertGeneralInfoRequest>,
) -> Result<Json<ApiResponse<GeneralInfoResponse>>, AppError> {
    let controller = GeneralInfoController::new(state.pool.clone());
    let response = controller.upsert(&user, request).await?;
    Ok(Json(response))
}
