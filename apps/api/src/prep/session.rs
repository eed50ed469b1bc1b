//! Per-session prep state.
//!
//! One explicit object holds the form inputs, the attached resume, the last
//! generation result and the loading flag. It changes only through the events
//! below: input change, file select/remove, generate, and the gateway outcome.

use tracing::{debug, warn};

use crate::models::prep::{GenerationResult, SessionInput};
use crate::prep::error::PrepError;
use crate::prep::ingest::{ingest_resume, ResumeUpload};
use crate::prep::orchestrator::Orchestrator;

#[derive(Debug, Default)]
pub struct PrepSession {
    input: SessionInput,
    results: GenerationResult,
    // Only observed through `is_loading` in tests; a request handler owns its session.
    #[allow(dead_code)]
    loading: bool,
}

impl PrepSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &SessionInput {
        &self.input
    }

    pub fn results(&self) -> &GenerationResult {
        &self.results
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub fn resume(&self) -> Option<&crate::prep::ingest::ResumeAttachment> {
        self.input.resume.as_ref()
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.input.job_description = text.into();
    }

    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.input.company_name = name.into();
    }

    /// Attaches a resume. A rejected file also drops whatever was attached before.
    pub fn select_file(&mut self, upload: ResumeUpload) -> Result<(), PrepError> {
        match ingest_resume(upload) {
            Ok(attachment) => {
                debug!(
                    "Resume attached: {} ({})",
                    attachment.file_name, attachment.media_type
                );
                self.input.resume = Some(attachment);
                Ok(())
            }
            Err(e) => {
                warn!("Resume rejected: {e}");
                self.remove_file();
                Err(e)
            }
        }
    }

    pub fn remove_file(&mut self) {
        self.input.resume = None;
    }

    /// Runs one generation and stores its result.
    ///
    /// Invalid input returns before anything changes. Otherwise the previous
    /// result is discarded up front; it is replaced only if all three calls
    /// succeed. `loading` is reset on every exit path.
    pub async fn generate(
        &mut self,
        orchestrator: &Orchestrator,
    ) -> Result<&GenerationResult, PrepError> {
        self.input.validate()?;

        self.loading = true;
        self.results = GenerationResult::default();

        let outcome = orchestrator.run(&self.input).await;
        self.loading = false;

        self.results = outcome?;
        Ok(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prep::ingest::ResumeContent;
    use crate::prep::testing::{FakeCompletion, FakeSearch};
    use bytes::Bytes;
    use std::sync::Arc;

    fn upload(name: &str, media_type: &str, bytes: &'static [u8]) -> ResumeUpload {
        ResumeUpload {
            file_name: name.to_string(),
            media_type: Some(media_type.to_string()),
            bytes: Bytes::from_static(bytes),
        }
    }

    fn filled_session() -> PrepSession {
        let mut session = PrepSession::new();
        session.set_job_description("Senior Rust engineer building storage engines");
        session.set_company_name("Acme");
        session
    }

    #[test]
    fn test_txt_selection_sets_resume_text() {
        let mut session = PrepSession::new();
        session
            .select_file(upload("resume.txt", "text/plain", b"Experienced engineer."))
            .unwrap();
        assert_eq!(
            session.resume().map(|r| r.content.clone()),
            Some(ResumeContent::PlainText { text: "Experienced engineer.".to_string() })
        );
    }

    #[test]
    fn test_docx_selection_clears_previous_file() {
        let mut session = PrepSession::new();
        session
            .select_file(upload("old.txt", "text/plain", b"old resume"))
            .unwrap();

        let err = session
            .select_file(upload(
                "resume.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                b"PK",
            ))
            .unwrap_err();

        assert!(matches!(err, PrepError::UnsupportedFile { .. }));
        assert!(session.resume().is_none());
    }

    #[test]
    fn test_remove_file() {
        let mut session = PrepSession::new();
        session.select_file(upload("r.pdf", "application/pdf", b"%PDF")).unwrap();
        session.remove_file();
        assert!(session.resume().is_none());
    }

    #[tokio::test]
    async fn test_successful_generation_stores_all_results() {
        let completion = Arc::new(FakeCompletion::default());
        let search = Arc::new(FakeSearch::empty());
        let orchestrator = Orchestrator::new(completion.clone(), search);

        let mut session = filled_session();
        let results = session.generate(&orchestrator).await.unwrap().clone();

        assert_eq!(results.resume.as_deref(), Some("generated #1"));
        assert_eq!(results.interview.as_deref(), Some("generated #2"));
        assert_eq!(results.company.as_deref(), Some("generated #3"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_failed_generation_shows_nothing_and_resets_loading() {
        let orchestrator = Orchestrator::new(
            Arc::new(FakeCompletion::default()),
            Arc::new(FakeSearch::empty()),
        );
        let mut session = filled_session();
        session.generate(&orchestrator).await.unwrap();
        assert!(!session.results().is_empty());

        let failing = Arc::new(FakeCompletion::failing_first());
        let orchestrator = Orchestrator::new(failing.clone(), Arc::new(FakeSearch::empty()));
        let err = session.generate(&orchestrator).await.unwrap_err();

        assert!(matches!(err, PrepError::Generation(_)));
        assert_eq!(failing.call_count(), 1);
        assert_eq!(session.results(), &GenerationResult::default());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_previous_results() {
        let orchestrator = Orchestrator::new(
            Arc::new(FakeCompletion::default()),
            Arc::new(FakeSearch::empty()),
        );
        let mut session = filled_session();
        session.generate(&orchestrator).await.unwrap();
        let before = session.results().clone();

        let completion = Arc::new(FakeCompletion::default());
        let search = Arc::new(FakeSearch::empty());
        let orchestrator = Orchestrator::new(completion.clone(), search.clone());
        session.set_company_name("  ");
        let err = session.generate(&orchestrator).await.unwrap_err();

        assert!(matches!(err, PrepError::Validation(_)));
        assert_eq!(session.results(), &before);
        assert_eq!(completion.call_count(), 0);
        assert_eq!(search.call_count(), 0);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_uploaded_text_reaches_resume_prompt() {
        let completion = Arc::new(FakeCompletion::default());
        let orchestrator = Orchestrator::new(completion.clone(), Arc::new(FakeSearch::empty()));

        let mut session = filled_session();
        session
            .select_file(upload("resume.txt", "text/plain", b"Experienced engineer."))
            .unwrap();
        session.generate(&orchestrator).await.unwrap();

        assert!(completion
            .prompt(0)
            .contains("Candidate's Current Resume:\nExperienced engineer."));
    }
}
