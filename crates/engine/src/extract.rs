//! Text-extraction collaborator boundary.
//!
//! Turns an uploaded PDF into plain text for the draft service. The engine
//! treats the extracted text as opaque narrative input — no interpretation
//! happens here. The outcome shape mirrors the boundary contract:
//! `{success, text?, error?}`.

use serde::Serialize;
use tracing::warn;

/// Result of one extraction attempt. `text` is set on success, `error` on
/// failure; callers surface `error` and fall back to manual entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionOutcome {
    fn ok(text: String) -> Self {
        Self {
            success: true,
            text: Some(text),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            text: None,
            error: Some(error),
        }
    }
}

/// Extracts plain text from an in-memory PDF payload. Extraction failure is
/// reported in the outcome, not raised — the generation pipeline does not
/// depend on this boundary succeeding.
pub fn extract_text(payload: &[u8]) -> ExtractionOutcome {
    match pdf_extract::extract_text_from_mem(payload) {
        Ok(text) => ExtractionOutcome::ok(text),
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            ExtractionOutcome::failed(format!("Failed to extract text: {e}"))
        }
    }
}
