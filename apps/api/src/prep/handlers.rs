//! Axum route handler for the prep form.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::prep::GenerationResult;
use crate::prep::ingest::ResumeUpload;
use crate::prep::orchestrator::Orchestrator;
use crate::prep::session::PrepSession;
use crate::render::format_text_output;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PrepResponse {
    pub results: GenerationResult,
    /// Same artifacts passed through the display formatter.
    pub formatted: GenerationResult,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/prep
///
/// Multipart form with `job_description`, `company_name` and an optional
/// `resume` file. Runs one full generation and returns raw and formatted text.
pub async fn handle_prep(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PrepResponse>, AppError> {
    let mut multipart = multipart?;
    let mut session = PrepSession::new();
    let mut upload: Option<ResumeUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => session.set_job_description(field.text().await?),
            "company_name" => session.set_company_name(field.text().await?),
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let media_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers submit an empty part when no file was picked.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                upload = Some(ResumeUpload {
                    file_name,
                    media_type,
                    bytes,
                });
            }
            other => warn!("Ignoring unknown form field {other:?}"),
        }
    }

    // Required fields are checked before the file so a bad form never pays for ingestion.
    session.input().validate()?;
    if let Some(upload) = upload {
        session.select_file(upload)?;
    }

    let orchestrator = Orchestrator::new(state.completion.clone(), state.search.clone());
    session.generate(&orchestrator).await?;
    let results = session.results().clone();

    Ok(Json(PrepResponse {
        formatted: results.map(format_text_output),
        results,
        generated_at: Utc::now(),
    }))
}
