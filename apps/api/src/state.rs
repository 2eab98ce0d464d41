use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatBackend;
use crate::templates::TemplateLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Chat-completion backend for both AI stages. `LlmClient` in production.
    pub llm: Arc<dyn ChatBackend>,
    /// Preset layouts, built once at startup.
    pub templates: Arc<TemplateLibrary>,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(llm: Arc<dyn ChatBackend>) -> Self {
        Self {
            config: Config::default(),
            llm,
            templates: Arc::new(TemplateLibrary::builtin()),
        }
    }
}
