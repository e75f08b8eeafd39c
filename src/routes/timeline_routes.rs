use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::timeline_controller::TimelineController;
use crate::dto::timeline_dto::{TimelineQuery, TimelineResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_timeline_router() -> Router<AppState> {
    Router::new().route("/", get(get_timeline))
}

async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, AppError> {
    let controller = TimelineController::new(state.pool.clone());
    let response = controller.get_month(query).await?;
    Ok(Json(response))
}
