use anyhow::{Context, Result};

/// Environment variable holding the chat-completion API key. Read per request.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the web search API key. Read per request.
pub const SEARCH_API_KEY_VAR: &str = "SEARCH_API_KEY";

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_SEARCH_API_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Application configuration loaded from environment variables.
///
/// Credentials are deliberately absent: the gateways look them up at request
/// time so a missing key fails a single call, not startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_base_url: String,
    pub search_api_url: String,
    /// `max_tokens` used by `/api/generate` when the caller omits it.
    pub default_max_tokens: u32,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
            openai_base_url: var_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            search_api_url: var_or("SEARCH_API_URL", DEFAULT_SEARCH_API_URL),
            default_max_tokens: var_or("DEFAULT_MAX_TOKENS", "1000")
                .parse::<u32>()
                .context("DEFAULT_MAX_TOKENS must be a positive integer")?,
            max_upload_bytes: var_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with defaults for every field, used by router tests.
    pub fn for_tests() -> Self {
        Self::from_lookup(|_| None).expect("defaults parse")
    }
}
