use std::sync::Arc;

use crate::config::Config;
use crate::gateway::{CompletionGateway, SearchGateway};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion backend. Default: `LlmClient`.
    pub completion: Arc<dyn CompletionGateway>,
    /// Web search backend. Default: `SearchClient`. Failures are tolerated by the prep run.
    pub search: Arc<dyn SearchGateway>,
}
