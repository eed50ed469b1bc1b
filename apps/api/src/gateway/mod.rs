//! Completion and Search gateways — the seams between the prep pipeline and the outside world.
//!
//! `AppState` carries `Arc<dyn CompletionGateway>` and `Arc<dyn SearchGateway>`;
//! the production backends are `LlmClient` and `SearchClient`.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::search_client::{SearchClient, SearchError, SearchHit};

pub mod handlers;

/// Turns one prompt into generated text. No retries, no partial output.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

/// Best-effort web search returning ranked title/snippet pairs.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

#[async_trait]
impl CompletionGateway for LlmClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        self.call_text(prompt, max_tokens).await
    }
}

#[async_trait]
impl SearchGateway for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        SearchClient::search(self, query).await
    }
}
