use axum::{extract::State, routing::post, Extension, Json, Router};

use crate::controllers::webhook_controller::WebhookController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::webhook_dto::{DailySummaryRequest, WebhookDeliveryResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_webhook_router() -> Router<AppState> {
    Router::new().route("/daily-summary", post(send_daily_summary))
}

async fn send_daily_summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DailySummaryRequest>,
) -> Result<Json<ApiResponse<WebhookDeliveryResponse>>, AppError> {
    let controller = WebhookController::new(&state);
    let response = controller.send_daily_summary(&user, request.date).await?;
    Ok(Json(response))
}
