//! Consulta do clima
//!
//! Coleta horária da WeatherAPI para a cidade configurada (condição atual
//! + previsão de 5 dias). A falha nunca derruba nada: o snapshot anterior
//! continua servido e, sem snapshot, a resposta degrada para placeholder.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::dto::weather_dto::{CurrentWeather, ForecastDay, WeatherApiResponse, WeatherResponse};
use crate::utils::errors::AppError;

/// Snapshot compartilhado entre o poller e os handlers.
pub type WeatherSnapshot = Arc<RwLock<Option<WeatherResponse>>>;

const POLL_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub struct WeatherService {
    api_key: String,
    city: String,
    client: reqwest::Client,
}

impl WeatherService {
    pub fn new(api_key: String, city: String, client: reqwest::Client) -> Self {
        Self {
            api_key,
            city,
            client,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Uma coleta: condição atual + 5 dias de previsão, em pt.
    pub async fn fetch_forecast(&self) -> Result<WeatherResponse, AppError> {
        let url = format!(
            "https://api.weatherapi.com/v1/forecast.json?key={}&q={}&days=5&lang=pt",
            self.api_key,
            urlencoding::encode(&self.city)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Falha na consulta do clima: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "WeatherAPI respondeu com status {}",
                status
            )));
        }

        let api_response: WeatherApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Resposta do clima inválida: {}", e)))?;

        Ok(WeatherResponse {
            available: true,
            city: self.city.clone(),
            current: Some(CurrentWeather {
                temp_c: api_response.current.temp_c,
                condition: api_response.current.condition.text,
                icon: api_response.current.condition.icon,
            }),
            forecast: api_response
                .forecast
                .forecastday
                .into_iter()
                .map(|day| ForecastDay {
                    date: day.date,
                    maxtemp_c: day.day.maxtemp_c,
                    condition: day.day.condition.text,
                    icon: day.day.condition.icon,
                })
                .collect(),
        })
    }

    /// Loop de coleta horária. Roda como task de background pela vida
    /// inteira do processo; cada falha só loga e espera a próxima volta.
    pub async fn run_poller(self, snapshot: WeatherSnapshot) {
        let mut interval = tokio::time::interval(POLL_INTERVAL);

        loop {
            interval.tick().await;

            match self.fetch_forecast().await {
                Ok(weather) => {
                    log::info!("🌤️ Clima atualizado para {}", self.city);
                    *snapshot.write().await = Some(weather);
                }
                Err(e) => {
                    log::warn!("⚠️ Clima indisponível no momento: {}", e);
                }
            }
        }
    }
}
