//! Health check endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Name reported by `GET /health`
pub const SERVICE_NAME: &str = "Items API";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Database health check response
#[derive(Serialize)]
pub struct DbHealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health - never touches storage
async fn health() -> Json<HealthResponse> {
    tracing::debug!("Health check");
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/db - one round trip to the database
async fn health_db(State(state): State<Arc<AppState>>) -> Result<Json<DbHealthResponse>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database health check failed");
            ApiError::Unavailable
        })?;

    Ok(Json(DbHealthResponse {
        status: "healthy",
        database: "connected",
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(health_db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "Items API");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
