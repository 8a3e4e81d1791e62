use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: i64,
}

// GET /health - Liveness plus a one-row round trip to the store
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = sqlx::query("SELECT 1").execute(&pool).await.is_ok();

    let (status, label, database) = if database_up {
        (StatusCode::OK, "ok", "up")
    } else {
        tracing::warn!("health check could not reach the database");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    let response = HealthResponse {
        status: label,
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
