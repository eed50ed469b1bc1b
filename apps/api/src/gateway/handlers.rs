//! Axum route handlers for the Completion and Search gateways.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::MAX_TOKENS_LIMIT;
use crate::search_client::SearchHit;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

/// POST /api/generate
///
/// Forwards one prompt to the completion backend and relays the first choice's text.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let max_tokens = request.max_tokens.unwrap_or(state.config.default_max_tokens);
    if max_tokens == 0 || max_tokens > MAX_TOKENS_LIMIT {
        return Err(AppError::Validation(format!(
            "max_tokens must be between 1 and {MAX_TOKENS_LIMIT}"
        )));
    }

    debug!("Generating with max_tokens={max_tokens}");
    let text = state.completion.complete(&request.prompt, max_tokens).await?;

    Ok(Json(GenerateResponse { text }))
}

/// POST /api/search
///
/// Returns ranked title/snippet pairs for a free-text query.
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload?;
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let results = state.search.search(&request.query).await?;

    Ok(Json(SearchResponse { results }))
}
