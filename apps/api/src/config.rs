use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
/// Loaded once at startup and cloned into the app state; never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. Empty means the fortune endpoint is disabled.
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_timeout_secs: u64,
    pub static_dir: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY", ""),
            openai_base_url: optional_env("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            static_dir: optional_env("STATIC_DIR", "static"),
            host: optional_env("HOST", "0.0.0.0"),
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }

    /// Whether a provider credential is present. Whitespace-only keys count as missing.
    pub fn api_key_configured(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Baseline config for tests: no network-facing values are ever used.
    pub fn for_tests(api_key: &str) -> Self {
        Config {
            openai_api_key: api_key.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            llm_timeout_secs: 5,
            static_dir: "does-not-exist".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
