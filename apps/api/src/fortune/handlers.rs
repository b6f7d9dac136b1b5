//! Axum route handlers for the Fortune API.

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::fortune::category::FortuneCategory;
use crate::fortune::models::{
    FortuneRequest, FortuneResponse, FortuneTypeInfo, FortuneTypesResponse, UserInfo,
};
use crate::fortune::prompts::{build_prompt, SYSTEM_PROMPT};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 50;

/// POST /api/fortune
///
/// Builds the fortune prompt from the request and returns the provider's text as-is.
/// Provider failures are mapped to 401 / 429 / 500 by `AppError::from(LlmError)`.
pub async fn handle_generate_fortune(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FortuneRequest>,
) -> Result<Json<FortuneResponse>, AppError> {
    info!(
        user = request.log_name(),
        zodiac = %request.zodiac,
        "Fortune requested"
    );

    if !state.config.api_key_configured() {
        return Err(AppError::Configuration);
    }

    let prompt = build_prompt(&request);
    info!(
        selected = %prompt.summary,
        categories = prompt.selected_types.len(),
        guided = prompt.guide_text.matches("\n- ").count(),
        "Calling provider"
    );

    let fortune = state.llm.complete(SYSTEM_PROMPT, &prompt.text).await?;

    let preview: String = fortune.chars().take(PREVIEW_CHARS).collect();
    info!("Provider call complete");
    debug!(preview = %preview, "Fortune preview");

    Ok(Json(FortuneResponse {
        success: true,
        fortune,
        timestamp: Utc::now(),
        user_info: UserInfo::from(&request),
    }))
}

/// GET /api/fortune-types
///
/// The category menu. Always six entries in fixed order.
pub async fn handle_list_fortune_types() -> Json<FortuneTypesResponse> {
    let fortune_types = FortuneCategory::ALL
        .into_iter()
        .map(|category| FortuneTypeInfo {
            key: category.key(),
            name: category.menu_name(),
            icon: category.icon(),
        })
        .collect();

    Json(FortuneTypesResponse { fortune_types })
}
