use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// All live sessions — the only mutable state in the process.
    pub sessions: SessionStore,
    /// Pluggable text-generation backend. Production: `GeminiClient`;
    /// tests swap in a stub so no handler needs a live network.
    pub generator: Arc<dyn TextGenerator>,
}
