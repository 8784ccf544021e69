//! Document generation pipeline.
//!
//! Flow: validate → resolve photo → build + serialize both documents →
//! bundle archive → return {archive, validation report}.
//!
//! One logical operation per call: no shared mutable state, no cross-call
//! caching, no internal retries, no cancellation contract. The two engines
//! have no data dependency on each other; each builds inside
//! `tokio::task::spawn_blocking` (document assembly and packing are
//! CPU-bound) and packaging waits on the join point for both. A failure in
//! either serialization fails the whole call with no partial output.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::archive::{bundle_documents, RIREKISHO_FILENAME, SHOKUMU_FILENAME};
use crate::errors::EngineError;
use crate::layout::{rirekisho_layout, shokumu_blocks, DocStyle, RirekishoOptions};
use crate::models::{GeneratedDocument, GenerationOutput, PersonalRecord};
use crate::photo::resolve_photo;
use crate::render::{render_rirekisho, render_shokumu, serialize_docx};
use crate::validate::validate_record;

/// Generates the Rirekisho/Shokumu-Keirekisho archive for one record, dated
/// today. The validation report is advisory and never blocks generation.
pub async fn generate_documents(record: &PersonalRecord) -> Result<GenerationOutput, EngineError> {
    generate_documents_at(record, Local::now().date_naive()).await
}

/// Date-injected variant of [`generate_documents`]. The date only feeds the
/// Shokumu Keirekisho's "as of" header; injecting it keeps generation
/// deterministic for identical inputs.
pub async fn generate_documents_at(
    record: &PersonalRecord,
    today: NaiveDate,
) -> Result<GenerationOutput, EngineError> {
    let validation = validate_record(record);
    if validation.has_warnings() {
        warn!("Record has missing fields: {validation:?}");
    }

    let photo = resolve_photo(record.identity.photo.as_deref()).await;
    debug!("Photo resolved: {}", photo.is_some());

    let style = DocStyle::default();
    let options = RirekishoOptions::default();

    // Order-independent engines; the join below is the packaging gate.
    let rirekisho_task = {
        let record = record.clone();
        let style = style.clone();
        tokio::task::spawn_blocking(move || -> Result<GeneratedDocument, EngineError> {
            let layout = rirekisho_layout(&record, &options);
            let docx = render_rirekisho(&layout, &style, photo.as_ref());
            Ok(GeneratedDocument {
                filename: RIREKISHO_FILENAME,
                bytes: serialize_docx(docx)?,
            })
        })
    };

    let shokumu_task = {
        let record = record.clone();
        let style = style.clone();
        tokio::task::spawn_blocking(move || -> Result<GeneratedDocument, EngineError> {
            let blocks = shokumu_blocks(&record, today);
            let docx = render_shokumu(&blocks, &style);
            Ok(GeneratedDocument {
                filename: SHOKUMU_FILENAME,
                bytes: serialize_docx(docx)?,
            })
        })
    };

    let (rirekisho_join, shokumu_join) = tokio::join!(rirekisho_task, shokumu_task);
    let rirekisho = flatten_build(rirekisho_join)?;
    let shokumu = flatten_build(shokumu_join)?;

    let archive = bundle_documents([&rirekisho, &shokumu])?;
    info!(
        "Generated archive: {} bytes ({} + {})",
        archive.len(),
        rirekisho.bytes.len(),
        shokumu.bytes.len()
    );

    Ok(GenerationOutput {
        archive,
        validation,
    })
}

/// Collapses a build task's join result. A panic inside a build task (e.g. a
/// photo payload that passed the dimension probe but is corrupt past decode
/// time) surfaces here as a serialization failure — fatal, no partial output.
fn flatten_build(
    joined: Result<Result<GeneratedDocument, EngineError>, tokio::task::JoinError>,
) -> Result<GeneratedDocument, EngineError> {
    match joined {
        Ok(result) => result,
        Err(join_error) => Err(EngineError::Serialization(format!(
            "document build task failed: {join_error}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, WorkEntry};

    fn sample_record() -> PersonalRecord {
        let mut record = PersonalRecord::default();
        record.identity.given_name = "Taro".to_string();
        record.identity.family_name = "Yamada".to_string();
        record.identity.email = "taro@example.com".to_string();
        record.education.push(EducationEntry {
            institution: "Sample University".to_string(),
            start_period: Some("2010-04".to_string()),
            end_period: Some("2014-03".to_string()),
            ..Default::default()
        });
        record.work_history.push(WorkEntry {
            organization: "Acme Corp".to_string(),
            title: "Engineer".to_string(),
            start_period: Some("2018-01".to_string()),
            is_ongoing: true,
            narrative: "Platform work.".to_string(),
            ..Default::default()
        });
        record
    }

    #[tokio::test]
    async fn test_generation_returns_archive_and_report() {
        let output = generate_documents(&sample_record()).await.unwrap();
        assert!(!output.archive.is_empty());
        // Email, address etc. present or flagged — advisory either way.
        assert!(output.validation.phone);
        assert!(!output.validation.education_empty);
    }

    #[tokio::test]
    async fn test_generation_survives_empty_record() {
        // Every field missing: warnings everywhere, but never an error.
        let output = generate_documents(&PersonalRecord::default()).await.unwrap();
        assert!(output.validation.has_warnings());
        assert!(!output.archive.is_empty());
    }

    #[tokio::test]
    async fn test_generation_is_deterministic_at_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let record = sample_record();
        let first = generate_documents_at(&record, date).await.unwrap();
        let second = generate_documents_at(&record, date).await.unwrap();
        assert_eq!(first.archive, second.archive);
        assert_eq!(first.validation, second.validation);
    }
}
