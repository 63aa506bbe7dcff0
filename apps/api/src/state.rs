use std::sync::Arc;

use crate::layout::PageSetup;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only per request.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Production: `LlmClient`; tests inject mocks.
    pub completions: Arc<dyn CompletionService>,
    /// Page geometry and flow constants for the resume renderer.
    pub page_setup: PageSetup,
}
