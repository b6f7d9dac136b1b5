use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub api_key_configured: bool,
}

/// GET /health
/// Liveness plus whether a provider key is configured. Never fails.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "AI 사주 운세 서비스 정상 작동 중",
        timestamp: Utc::now().to_rfc3339(),
        api_key_configured: state.config.api_key_configured(),
    })
}
