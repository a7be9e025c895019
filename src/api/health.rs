use axum::Json;
use shared::Health;

/// GET /api/health
pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "UP".to_string(),
        message: "BFF API is running".to_string(),
    })
}
