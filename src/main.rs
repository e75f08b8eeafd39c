mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::create_pool;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use services::weather_service::WeatherService;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 Gestão de Frota e Demandas - API");
    info!("===================================");

    let config = EnvironmentConfig::default();

    // Inicializar banco de dados
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let app_state = AppState::new(pool, config.clone());

    // Poller do clima em background (coleta horária)
    let weather_service = WeatherService::new(
        config.weather_api_key.clone(),
        config.weather_city.clone(),
        app_state.http_client.clone(),
    );
    tokio::spawn(weather_service.run_poller(app_state.weather.clone()));

    // Rotas autenticadas: a sessão é resolvida pelo middleware e entregue
    // aos handlers via extension
    let protected = Router::new()
        .nest("/api/auth", routes::auth_routes::create_session_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/status", routes::status_routes::create_status_router())
        .nest(
            "/api/observation",
            routes::observation_routes::create_observation_router(),
        )
        .nest(
            "/api/general-info",
            routes::general_info_routes::create_general_info_router(),
        )
        .nest(
            "/api/dashboard",
            routes::dashboard_routes::create_dashboard_router(),
        )
        .nest(
            "/api/timeline",
            routes::timeline_routes::create_timeline_router(),
        )
        .nest(
            "/api/webhook",
            routes::webhook_routes::create_webhook_router(),
        )
        .nest(
            "/api/weather",
            routes::weather_routes::create_weather_router(),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::auth_middleware,
        ));

    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Cadastro");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil da sessão");
    info!("🚗 Veículos:");
    info!("   POST /api/vehicle - Criar veículo (com status do dia)");
    info!("   GET  /api/vehicle - Listar veículos");
    info!("   GET  /api/vehicle/known-names - Placas e motoristas conhecidos");
    info!("   GET  /api/vehicle/:id - Obter veículo");
    info!("   PUT  /api/vehicle/:id - Atualizar veículo");
    info!("   DELETE /api/vehicle/:id - Excluir veículo (cascata)");
    info!("📋 Status diário:");
    info!("   GET  /api/status?date= - Registros do dia");
    info!("   PUT  /api/status - Upsert por veículo + data");
    info!("   POST /api/status/copy-previous-day - Copiar dia anterior");
    info!("   DELETE /api/status/:id - Remover registro");
    info!("📝 Observações:");
    info!("   GET  /api/observation?date= - Observação do dia");
    info!("   GET  /api/observation/history?date= - Histórico");
    info!("   PUT  /api/observation - Upsert por data");
    info!("   PUT  /api/observation/:id - Editar");
    info!("   DELETE /api/observation/:id - Excluir");
    info!("📊 Agregações:");
    info!("   GET  /api/general-info?date= - Informativo geral");
    info!("   PUT  /api/general-info - Salvar informativo");
    info!("   GET  /api/dashboard?date= - Resumo da frota");
    info!("   GET  /api/timeline?month= - Timeline mensal");
    info!("🔗 Integrações:");
    info!("   POST /api/webhook/daily-summary - Enviar resumo ao webhook");
    info!("   GET  /api/weather - Clima (snapshot horário)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor finalizado");
    Ok(())
}

/// Health check simples
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-dashboard",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
