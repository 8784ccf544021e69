//! Generation engine for Japanese employment-application documents.
//!
//! Converts a normalized [`PersonalRecord`] into a Rirekisho (fixed two-page
//! standardized curriculum form) and a Shokumu Keirekisho (free-form work
//! history), both as `.docx`, bundled into a single zip archive together
//! with a field-presence [`ValidationReport`].
//!
//! ```no_run
//! # async fn example() -> Result<(), engine::EngineError> {
//! let record = engine::PersonalRecord::default();
//! let output = engine::generate_documents(&record).await?;
//! // output.archive → 履歴書.docx + 職務経歴書.docx
//! // output.validation → advisory missing-field report
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod config;
pub mod dates;
pub mod errors;
pub mod extract;
pub mod generate;
pub mod layout;
pub mod llm_client;
pub mod models;
pub mod photo;
pub mod render;
pub mod validate;

pub use archive::{RIREKISHO_FILENAME, SHOKUMU_FILENAME};
pub use config::Config;
pub use errors::EngineError;
pub use generate::{generate_documents, generate_documents_at};
pub use models::{
    EducationEntry, GeneratedDocument, GenerationOutput, Identity, LanguageSkill, PersonalRecord,
    ValidationReport, WorkEntry,
};
pub use validate::validate_record;
