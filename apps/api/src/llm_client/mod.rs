/// LLM Client — the single point of entry for all provider calls in the fortune service.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// Handlers talk to `CompletionProvider`; `LlmClient` is the only implementation shipped.
///
/// Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// The model used for every fortune. Intentionally hardcoded.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Coarse failure buckets exposed to callers as 401 / 429 / 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Other,
}

impl LlmError {
    /// Typed variants map directly. Untyped errors fall back to matching
    /// the message text, so a 403 "quota" body still reads as a rate limit.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LlmError::Authentication(_) => ErrorCategory::Authentication,
            LlmError::RateLimited(_) => ErrorCategory::RateLimit,
            other => classify_message(&other.to_string()),
        }
    }
}

fn classify_message(message: &str) -> ErrorCategory {
    let lower = message.to_lowercase();
    if lower.contains("authentication") {
        ErrorCategory::Authentication
    } else if lower.contains("rate limit") || lower.contains("quota") {
        ErrorCategory::RateLimit
    } else {
        ErrorCategory::Other
    }
}

/// Text-generation provider seam. Held as `Arc<dyn CompletionProvider>` in app state.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a system instruction plus one user message; returns the raw generated text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first choice, if the provider returned any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// The single LLM client used by the fortune service.
/// Wraps the OpenAI Chat Completions API. No retries: every failure surfaces immediately.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    /// Makes a raw call to the Chat Completions API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Turns a non-success response into a typed error.
/// The provider's `{"error": {"message": ...}}` body is used when it parses.
fn error_from_status(status: StatusCode, body: &str) -> LlmError {
    let parsed = serde_json::from_str::<OpenAiError>(body).ok();
    let message = parsed
        .as_ref()
        .map(|e| e.error.message.clone())
        .unwrap_or_else(|| body.to_string());
    let kind = parsed
        .as_ref()
        .and_then(|e| e.error.code.as_deref().or(e.error.error_type.as_deref()))
        .unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => LlmError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
        _ if matches!(kind, "invalid_api_key" | "authentication_error") => {
            LlmError::Authentication(message)
        }
        _ if kind == "insufficient_quota" => LlmError::RateLimited(message),
        _ => LlmError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "persona",
                },
                ChatMessage {
                    role: "user",
                    content: "운세를 봐주세요",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 800);
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);

        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "persona");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "운세를 봐주세요");
    }

    #[test]
    fn test_text_returns_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "🐴 좋은 하루"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("🐴 좋은 하루"));
    }

    #[test]
    fn test_text_none_when_content_null() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_text_none_when_no_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_401_is_authentication() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let err = error_from_status(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, LlmError::Authentication(ref m) if m == "Incorrect API key provided"));
        assert_eq!(err.category(), ErrorCategory::Authentication);
    }

    #[test]
    fn test_429_is_rate_limited() {
        let body = r#"{"error": {"message": "You exceeded your current quota", "type": "insufficient_quota", "code": "insufficient_quota"}}"#;
        let err = error_from_status(StatusCode::TOO_MANY_REQUESTS, body);
        assert!(matches!(err, LlmError::RateLimited(_)));
        assert_eq!(err.category(), ErrorCategory::RateLimit);
    }

    #[test]
    fn test_quota_code_on_other_status_is_rate_limited() {
        let body = r#"{"error": {"message": "billing", "type": "insufficient_quota", "code": null}}"#;
        let err = error_from_status(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, LlmError::RateLimited(_)));
    }

    #[test]
    fn test_unparseable_body_kept_verbatim() {
        let err = error_from_status(StatusCode::BAD_GATEWAY, "upstream exploded");
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_category_falls_back_to_message_text() {
        let auth = LlmError::Api {
            status: 403,
            message: "Authentication header malformed".to_string(),
        };
        assert_eq!(auth.category(), ErrorCategory::Authentication);

        let rate = LlmError::Api {
            status: 503,
            message: "Rate Limit reached for requests".to_string(),
        };
        assert_eq!(rate.category(), ErrorCategory::RateLimit);

        let quota = LlmError::Api {
            status: 400,
            message: "monthly QUOTA used".to_string(),
        };
        assert_eq!(quota.category(), ErrorCategory::RateLimit);
    }

    #[test]
    fn test_category_other() {
        assert_eq!(LlmError::EmptyContent.category(), ErrorCategory::Other);
        let err = LlmError::Api {
            status: 500,
            message: "server error".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Other);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = LlmClient::new("k".into(), "http://localhost:9999/".into(), 1).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }
}
