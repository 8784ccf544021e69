use thiserror::Error;

/// Engine-level error type returned by the generation pipeline.
///
/// Missing or malformed optional data is NOT an error anywhere in this crate —
/// it degrades to blank cells or placeholder rendering inside the layout
/// engines. The variants below cover the genuinely fatal conditions only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The docx encoder could not produce valid binary output (e.g. a photo
    /// payload that passed the dimension probe but failed decoding at embed
    /// time). Fatal to the whole generation call; no partial output.
    #[error("Document serialization failed: {0}")]
    Serialization(String),

    /// The zip writer failed. Fatal, same propagation as serialization.
    #[error("Archive packaging failed: {0}")]
    Packaging(#[from] zip::result::ZipError),

    /// The generative text service returned an error or unusable payload.
    #[error("Draft service error: {0}")]
    Llm(String),

    /// PDF text extraction failed at the collaborator boundary.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
