//! Rirekisho layout engine.
//!
//! Produces the row/block model for the two-page standardized curriculum
//! form. The structure is fixed regardless of data volume: recruiters expect
//! the document to resemble the physical paper form, so the history and
//! certification tables are padded to their minimum line counts and every
//! optional field renders as blank space, never as an omitted section.

use crate::dates::{tokenize_period, DateTokens, ONGOING_MARKER};
use crate::layout::rows::{
    pad_to_minimum, HistoryRow, CERTIFICATION_MIN_ROWS, HISTORY_MIN_ROWS,
};
use crate::models::{EducationEntry, Identity, PersonalRecord, WorkEntry};

/// Document title, spaced per paper-form convention.
pub const RIREKISHO_TITLE: &str = "履 歴 書";

/// Closing marker row terminating the history table.
pub const CLOSING_MARKER: &str = "以上";

/// Column headers for the page-1 history table.
pub const HISTORY_HEADER: [&str; 3] = ["年", "月", "学歴・職歴"];

/// Column headers for the page-2 certifications table.
pub const CERTIFICATION_HEADER: [&str; 3] = ["年", "月", "免許・資格"];

/// Section headings on page 2.
pub const SELF_PROMOTION_HEADING: &str = "志望動機・自己PR";
pub const PERSONAL_REQUESTS_HEADING: &str = "本人希望記入欄";

/// Deference-to-employer boilerplate used when no override is supplied.
pub const DEFAULT_PERSONAL_REQUESTS: &str = "貴社の規定に従います。";

/// Optional knobs for the Rirekisho. Everything else comes from the record.
#[derive(Debug, Clone, Default)]
pub struct RirekishoOptions {
    /// Override for the "personal requests" block on page 2.
    pub personal_requests: Option<String>,
}

/// The complete intermediate model for the two-page document. The renderer
/// lowers this into docx without any further layout decisions.
#[derive(Debug, Clone)]
pub struct RirekishoLayout {
    pub identity: Identity,
    pub history: Vec<HistoryRow>,
    pub certifications: Vec<HistoryRow>,
    pub self_promotion: String,
    pub personal_requests: String,
}

/// Builds the full Rirekisho model from a record. Infallible: missing data
/// degrades to blank rows and cells per the lenient-parsing policy.
pub fn rirekisho_layout(record: &PersonalRecord, options: &RirekishoOptions) -> RirekishoLayout {
    RirekishoLayout {
        identity: record.identity.clone(),
        history: history_rows(record),
        certifications: certification_rows(record),
        self_promotion: record.self_promotion.clone(),
        personal_requests: options
            .personal_requests
            .clone()
            .unwrap_or_else(|| DEFAULT_PERSONAL_REQUESTS.to_string()),
    }
}

/// Chronological history rows: education entries as paired entered/graduated
/// rows, then work entries as paired joined/left rows, the closing marker,
/// then blank padding up to [`HISTORY_MIN_ROWS`].
pub fn history_rows(record: &PersonalRecord) -> Vec<HistoryRow> {
    let mut rows = Vec::new();

    for entry in &record.education {
        push_education_pair(&mut rows, entry);
    }
    for entry in &record.work_history {
        push_work_pair(&mut rows, entry);
    }
    rows.push(HistoryRow::Marker(CLOSING_MARKER.to_string()));

    pad_to_minimum(rows, HISTORY_MIN_ROWS)
}

/// Certification rows padded up to [`CERTIFICATION_MIN_ROWS`]. Certifications
/// carry no dates in the record, so the date cells stay blank.
pub fn certification_rows(record: &PersonalRecord) -> Vec<HistoryRow> {
    let rows = record
        .certifications
        .iter()
        .map(|name| HistoryRow::entry(DateTokens::empty(), name.clone()))
        .collect();

    pad_to_minimum(rows, CERTIFICATION_MIN_ROWS)
}

fn push_education_pair(rows: &mut Vec<HistoryRow>, entry: &EducationEntry) {
    let name = match &entry.credential {
        Some(credential) if !credential.trim().is_empty() => {
            format!("{} {}", entry.institution, credential)
        }
        _ => entry.institution.clone(),
    };

    rows.push(HistoryRow::entry(
        tokenize_period(entry.start_period.as_deref()),
        format!("{name} 入学"),
    ));

    if entry.is_ongoing {
        rows.push(HistoryRow::Marker(ONGOING_MARKER.to_string()));
    } else {
        rows.push(HistoryRow::entry(
            tokenize_period(entry.end_period.as_deref()),
            format!("{name} 卒業"),
        ));
    }
}

fn push_work_pair(rows: &mut Vec<HistoryRow>, entry: &WorkEntry) {
    rows.push(HistoryRow::entry(
        tokenize_period(entry.start_period.as_deref()),
        format!("{} 入社", entry.organization),
    ));

    if entry.is_ongoing {
        rows.push(HistoryRow::Marker(ONGOING_MARKER.to_string()));
    } else {
        rows.push(HistoryRow::entry(
            tokenize_period(entry.end_period.as_deref()),
            format!("{} 退社", entry.organization),
        ));
    }
}
