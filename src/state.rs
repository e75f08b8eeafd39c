//! Shared application state
//!
//! Este módulo define o estado compartilhado da aplicação que passa
//! pelo router do Axum. A sessão do usuário NÃO vive aqui: ela é
//! resolvida pelo middleware e entregue explicitamente aos handlers.

use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::services::weather_service::WeatherSnapshot;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
    /// Último snapshot do clima escrito pelo poller de background.
    pub weather: WeatherSnapshot,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            pool,
            config,
            http_client,
            weather: Arc::new(RwLock::new(None)),
        }
    }
}
