use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "fleet-dashboard");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_rota_protegida_sem_token() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard?date=2024-03-01")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_envelope_de_resposta() {
    // O envelope {success, message, data} é o contrato de todas as
    // mutações da API
    let envelope = json!({
        "success": true,
        "message": "Dados do dia anterior copiados com sucesso!",
        "data": { "source_date": "2024-02-29", "target_date": "2024-03-01", "copied": 12 }
    });

    assert!(envelope["success"].as_bool().unwrap());
    assert_eq!(envelope["data"]["copied"], 12);
}

// App de teste mínima: mesmas formas de resposta, sem banco
fn create_test_app() -> axum::Router {
    axum::Router::new()
        .route(
            "/health",
            axum::routing::get(|| async {
                axum::Json(json!({
                    "service": "fleet-dashboard",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/api/dashboard",
            axum::routing::get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({
                        "error": "Unauthorized",
                        "message": "Token de autorização requerido",
                        "code": "UNAUTHORIZED"
                    })),
                )
            }),
        )
}
