use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::{ErrorCategory, LlmError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error body has the shape `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider credential is not configured")]
    Configuration,

    #[error("Provider rejected the credential")]
    Authentication,

    #[error("Provider rate limit or quota exceeded")]
    RateLimited,

    #[error("Provider error: {0}")]
    Provider(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err.category() {
            ErrorCategory::Authentication => AppError::Authentication,
            ErrorCategory::RateLimit => AppError::RateLimited,
            ErrorCategory::Other => AppError::Provider(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Configuration => {
                tracing::error!("Fortune requested but OPENAI_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "서버에 OpenAI API 키가 설정되지 않았습니다.".to_string(),
                )
            }
            AppError::Authentication => {
                tracing::error!("Provider authentication failed");
                (
                    StatusCode::UNAUTHORIZED,
                    "OpenAI API 키 인증에 실패했습니다.".to_string(),
                )
            }
            AppError::RateLimited => {
                tracing::error!("Provider rate limit or quota exceeded");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "API 사용량을 초과했습니다. OpenAI 계정을 확인해주세요.".to_string(),
                )
            }
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("서버 내부 오류: {msg}"),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
