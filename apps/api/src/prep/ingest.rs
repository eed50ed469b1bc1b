//! Resume file ingestion.
//!
//! Plain-text resumes are read as UTF-8. PDFs are base64-encoded and kept as an
//! opaque blob: nothing downstream decodes them, the prompt only gets a
//! placeholder sentence. Any other file type is rejected.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::Serialize;

use crate::prep::error::PrepError;

const PDF_MEDIA_TYPE: &str = "application/pdf";
const TEXT_MEDIA_TYPE: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

/// A file as received from the client, before ingestion.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub media_type: Option<String>,
    pub bytes: Bytes,
}

/// Ingested resume content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeContent {
    PlainText { text: String },
    Pdf { base64: String },
}

impl ResumeContent {
    /// Raw resume text as held in session state: the text itself, or the base64 blob.
    pub fn raw(&self) -> &str {
        match self {
            ResumeContent::PlainText { text } => text,
            ResumeContent::Pdf { base64 } => base64,
        }
    }
}

/// A successfully ingested resume together with its file metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub media_type: String,
    pub content: ResumeContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeKind {
    Pdf,
    Text,
}

fn classify(upload: &ResumeUpload) -> Option<ResumeKind> {
    let media_type = upload
        .media_type
        .as_deref()
        .map(|m| m.split(';').next().unwrap_or(m).trim().to_ascii_lowercase());
    let name = upload.file_name.to_ascii_lowercase();

    match media_type.as_deref() {
        Some(PDF_MEDIA_TYPE) => Some(ResumeKind::Pdf),
        Some(TEXT_MEDIA_TYPE) => Some(ResumeKind::Text),
        // Clients that don't sniff types send octet-stream; fall back on the extension.
        None | Some(OCTET_STREAM) if name.ends_with(".pdf") => Some(ResumeKind::Pdf),
        _ if name.ends_with(".txt") => Some(ResumeKind::Text),
        _ => None,
    }
}

/// Reads an uploaded resume into an attachment, or rejects it.
pub fn ingest_resume(upload: ResumeUpload) -> Result<ResumeAttachment, PrepError> {
    let kind = classify(&upload).ok_or_else(|| PrepError::UnsupportedFile {
        file_name: upload.file_name.clone(),
        media_type: upload
            .media_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    })?;

    let (media_type, content) = match kind {
        ResumeKind::Pdf => (
            PDF_MEDIA_TYPE,
            ResumeContent::Pdf {
                base64: STANDARD.encode(&upload.bytes),
            },
        ),
        ResumeKind::Text => {
            let text = String::from_utf8(upload.bytes.to_vec()).map_err(|e| {
                PrepError::UnreadableFile {
                    file_name: upload.file_name.clone(),
                    reason: e.to_string(),
                }
            })?;
            (TEXT_MEDIA_TYPE, ResumeContent::PlainText { text })
        }
    };

    Ok(ResumeAttachment {
        file_name: upload.file_name,
        media_type: media_type.to_string(),
        content,
    })
}
