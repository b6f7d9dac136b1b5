use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation provider. `LlmClient` in production.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
