use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Name used in prompts and echoes when the user leaves `name` blank.
pub const DEFAULT_NAME: &str = "고객님";
/// Name used in request logs when the user leaves `name` blank.
pub const ANONYMOUS_NAME: &str = "익명";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FortuneRequest {
    pub birth_date: String,
    pub gender: String,
    /// Zodiac-animal label, e.g. "말". Rendered as "{zodiac}띠" in the prompt.
    pub zodiac: String,
    #[validate(length(max = 50, message = "name must be at most 50 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "concern must be at most 500 characters"))]
    pub concern: Option<String>,
    #[validate(length(
        min = 1,
        max = 6,
        message = "fortune_types must contain between 1 and 6 entries"
    ))]
    pub fortune_types: Vec<String>,
}

impl FortuneRequest {
    /// The request name, or `DEFAULT_NAME` when absent or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME,
        }
    }

    /// The request name for logging, or `ANONYMOUS_NAME` when absent or empty.
    pub fn log_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }

    /// The free-text concern, treating an empty string as absent.
    pub fn concern(&self) -> Option<&str> {
        self.concern.as_deref().filter(|c| !c.is_empty())
    }
}

/// Echo of the request with the default name substituted.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub birth_date: String,
    pub gender: String,
    pub zodiac: String,
    pub name: String,
    pub fortune_types: Vec<String>,
}

impl From<&FortuneRequest> for UserInfo {
    fn from(request: &FortuneRequest) -> Self {
        UserInfo {
            birth_date: request.birth_date.clone(),
            gender: request.gender.clone(),
            zodiac: request.zodiac.clone(),
            name: request.display_name().to_string(),
            fortune_types: request.fortune_types.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FortuneResponse {
    pub success: bool,
    pub fortune: String,
    pub timestamp: DateTime<Utc>,
    pub user_info: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct FortuneTypeInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FortuneTypesResponse {
    pub fortune_types: Vec<FortuneTypeInfo>,
}
