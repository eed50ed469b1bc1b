use thiserror::Error;

use crate::llm_client::LlmError;

/// Failures of a prep run or of resume ingestion.
#[derive(Debug, Error)]
pub enum PrepError {
    /// A required field is missing. Raised before any gateway call.
    #[error("{0}")]
    Validation(&'static str),

    #[error("unsupported file '{file_name}' ({media_type})")]
    UnsupportedFile { file_name: String, media_type: String },

    #[error("could not read file '{file_name}': {reason}")]
    UnreadableFile { file_name: String, reason: String },

    /// A completion call failed; the whole run is abandoned.
    #[error("completion failed: {0}")]
    Generation(#[from] LlmError),
}

impl PrepError {
    pub const MISSING_JOB_DESCRIPTION: &'static str = "Please paste a job description first";
    pub const MISSING_COMPANY_NAME: &'static str = "Please enter the company name for research";
    pub const UNSUPPORTED_FILE: &'static str = "Please upload a PDF or TXT file";
    pub const UNREADABLE_FILE: &'static str = "Error reading file. Please try again.";
    pub const GENERATION_FAILED: &'static str = "Error generating content. Please try again.";

    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            PrepError::Validation(msg) => msg.to_string(),
            PrepError::UnsupportedFile { .. } => Self::UNSUPPORTED_FILE.to_string(),
            PrepError::UnreadableFile { .. } => Self::UNREADABLE_FILE.to_string(),
            PrepError::Generation(_) => Self::GENERATION_FAILED.to_string(),
        }
    }
}
