use serde::Serialize;

use crate::prep::error::PrepError;
use crate::prep::ingest::ResumeAttachment;

/// Everything the user has entered for one prep run.
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub job_description: String,
    pub company_name: String,
    pub resume: Option<ResumeAttachment>,
}

impl SessionInput {
    /// Both text fields must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), PrepError> {
        if self.job_description.trim().is_empty() {
            return Err(PrepError::Validation(PrepError::MISSING_JOB_DESCRIPTION));
        }
        if self.company_name.trim().is_empty() {
            return Err(PrepError::Validation(PrepError::MISSING_COMPANY_NAME));
        }
        Ok(())
    }
}

/// The three generated artifacts. `None` means not generated (yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub resume: Option<String>,
    pub interview: Option<String>,
    pub company: Option<String>,
}

impl GenerationResult {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.resume.is_none() && self.interview.is_none() && self.company.is_none()
    }

    /// Applies `f` to every present field.
    pub fn map(&self, f: impl Fn(&str) -> String) -> GenerationResult {
        GenerationResult {
            resume: self.resume.as_deref().map(&f),
            interview: self.interview.as_deref().map(&f),
            company: self.company.as_deref().map(&f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(jd: &str, company: &str) -> SessionInput {
        SessionInput {
            job_description: jd.to_string(),
            company_name: company.to_string(),
            resume: None,
        }
    }

    #[test]
    fn test_whitespace_job_description_is_rejected_first() {
        let err = input("  \n\t", "").validate().unwrap_err();
        assert_eq!(err.user_message(), "Please paste a job description first");
    }

    #[test]
    fn test_empty_company_is_rejected() {
        let err = input("Rust engineer", "   ").validate().unwrap_err();
        assert_eq!(err.user_message(), "Please enter the company name for research");
    }

    #[test]
    fn test_filled_input_validates() {
        assert!(input("Rust engineer", "Acme").validate().is_ok());
    }

    #[test]
    fn test_map_skips_missing_fields() {
        let result = GenerationResult {
            resume: Some("a".into()),
            interview: None,
            company: Some("c".into()),
        };
        let upper = result.map(|s| s.to_uppercase());
        assert_eq!(upper.resume.as_deref(), Some("A"));
        assert!(upper.interview.is_none());
        assert_eq!(upper.company.as_deref(), Some("C"));
        assert!(!result.is_empty());
        assert!(GenerationResult::default().is_empty());
    }
}
