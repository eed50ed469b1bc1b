//! Prep Orchestrator — builds the three prompts and drives the gateways.
//!
//! Flow: validate → search (best-effort) → resume → interview → company.
//!
//! The completion calls run strictly one after another. The first failure
//! abandons the run: later calls are not issued and no partial result is
//! returned.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::gateway::{CompletionGateway, SearchGateway};
use crate::llm_client::prompts::{render_template, EMPHASIS_INSTRUCTION};
use crate::models::prep::{GenerationResult, SessionInput};
use crate::prep::error::PrepError;
use crate::prep::ingest::{ResumeAttachment, ResumeContent};
use crate::prep::prompts::{
    COMPANY_MAX_TOKENS, COMPANY_PROMPT_TEMPLATE, INTERVIEW_MAX_TOKENS, INTERVIEW_PROMPT_TEMPLATE,
    NO_SEARCH_CONTEXT, PDF_RESUME_CONTEXT, RESUME_CONTEXT_HEADER, RESUME_MAX_TOKENS,
    RESUME_PROMPT_TEMPLATE, SEARCH_CONTEXT_TEMPLATE,
};

/// Snippets from the search gateway that make it into the company prompt.
const SEARCH_SNIPPETS_USED: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

/// The three prompts of one run.
#[derive(Debug, Clone)]
pub struct PrepPrompts {
    pub resume: String,
    pub interview: String,
    pub company: String,
}

/// Resume section appended to the resume and interview prompts.
/// Empty when no resume was uploaded or the upload was empty.
pub fn build_resume_context(resume: Option<&ResumeAttachment>) -> String {
    let Some(attachment) = resume else {
        return String::new();
    };
    if attachment.content.raw().is_empty() {
        return String::new();
    }
    match &attachment.content {
        ResumeContent::PlainText { text } => format!("{RESUME_CONTEXT_HEADER}{text}"),
        ResumeContent::Pdf { .. } => PDF_RESUME_CONTEXT.to_string(),
    }
}

/// Search query used for company research.
pub fn company_search_query(company_name: &str) -> String {
    format!("{company_name} company mission products news")
}

/// Company-research context built from search snippets, one `title: snippet` per line.
pub fn build_search_context(company_name: &str, snippets: &str) -> String {
    if snippets.is_empty() {
        return NO_SEARCH_CONTEXT.to_string();
    }
    render_template(
        SEARCH_CONTEXT_TEMPLATE,
        &[("company_name", company_name), ("snippets", snippets)],
    )
}

/// Builds all three prompts from the session input and the (possibly empty) search snippets.
pub fn build_prompts(input: &SessionInput, snippets: &str) -> PrepPrompts {
    let resume_context = build_resume_context(input.resume.as_ref());
    let search_context = build_search_context(&input.company_name, snippets);

    let resume = render_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("job_description", input.job_description.as_str()),
            ("company_name", input.company_name.as_str()),
            ("resume_context", resume_context.as_str()),
            ("formatting", EMPHASIS_INSTRUCTION),
        ],
    );
    let interview = render_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("job_description", input.job_description.as_str()),
            ("company_name", input.company_name.as_str()),
            ("resume_context", resume_context.as_str()),
            ("formatting", EMPHASIS_INSTRUCTION),
        ],
    );
    let company = render_template(
        COMPANY_PROMPT_TEMPLATE,
        &[
            ("job_description", input.job_description.as_str()),
            ("company_name", input.company_name.as_str()),
            ("search_context", search_context.as_str()),
            ("formatting", EMPHASIS_INSTRUCTION),
        ],
    );

    PrepPrompts {
        resume,
        interview,
        company,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Orchestrator {
    completion: Arc<dyn CompletionGateway>,
    search: Arc<dyn SearchGateway>,
}

impl Orchestrator {
    pub fn new(completion: Arc<dyn CompletionGateway>, search: Arc<dyn SearchGateway>) -> Self {
        Self { completion, search }
    }

    /// Runs one generation: validation, search, then three sequential completions.
    pub async fn run(&self, input: &SessionInput) -> Result<GenerationResult, PrepError> {
        input.validate()?;

        let run_id = Uuid::new_v4();
        info!(
            "Prep run {run_id} started for company {:?} (resume attached: {})",
            input.company_name.trim(),
            input.resume.is_some()
        );

        let snippets = self.fetch_company_snippets(run_id, &input.company_name).await;
        let prompts = build_prompts(input, &snippets);

        let resume = self
            .generate(run_id, "resume", &prompts.resume, RESUME_MAX_TOKENS)
            .await?;
        let interview = self
            .generate(run_id, "interview", &prompts.interview, INTERVIEW_MAX_TOKENS)
            .await?;
        let company = self
            .generate(run_id, "company", &prompts.company, COMPANY_MAX_TOKENS)
            .await?;

        info!("Prep run {run_id} completed");

        Ok(GenerationResult {
            resume: Some(resume),
            interview: Some(interview),
            company: Some(company),
        })
    }

    /// Search is best-effort: any failure yields no snippets.
    async fn fetch_company_snippets(&self, run_id: Uuid, company_name: &str) -> String {
        match self.search.search(&company_search_query(company_name)).await {
            Ok(hits) => hits
                .iter()
                .take(SEARCH_SNIPPETS_USED)
                .map(|h| format!("{}: {}", h.title, h.snippet))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                warn!("Prep run {run_id}: search unavailable, using model knowledge: {e}");
                String::new()
            }
        }
    }

    async fn generate(
        &self,
        run_id: Uuid,
        section: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, PrepError> {
        self.completion
            .complete(prompt, max_tokens)
            .await
            .map_err(|e| {
                warn!("Prep run {run_id}: {section} generation failed: {e}");
                PrepError::Generation(e)
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
