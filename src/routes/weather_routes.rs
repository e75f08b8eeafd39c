use axum::{extract::State, routing::get, Json, Router};

use crate::dto::weather_dto::WeatherResponse;
use crate::state::AppState;

pub fn create_weather_router() -> Router<AppState> {
    Router::new().route("/", get(get_weather))
}

/// Serve o snapshot mais recente do poller; sem coleta bem-sucedida
/// ainda, degrada para o placeholder "indisponível".
async fn get_weather(State(state): State<AppState>) -> Json<WeatherResponse> {
    let snapshot = state.weather.read().await;

    match snapshot.as_ref() {
        Some(weather) => Json(weather.clone()),
        None => Json(WeatherResponse::unavailable(
            state.config.weather_city.clone(),
        )),
    }
}
