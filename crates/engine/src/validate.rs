//! Field presence validation.
//!
//! Pure function of the record — no I/O, no side effects, idempotent. The
//! report is advisory: generation always proceeds, and the caller surfaces
//! missing fields as a non-blocking warning next to the download.

use crate::models::{PersonalRecord, ValidationReport};

/// Reports which required fields are absent from the record. A field counts
/// as missing when it is absent, empty, or whitespace-only; the education and
/// work-history sequences count as missing when they have zero entries.
pub fn validate_record(record: &PersonalRecord) -> ValidationReport {
    ValidationReport {
        birth_date: is_blank(record.identity.birth_date.as_deref()),
        address: is_blank(record.identity.address.as_deref()),
        phone: is_blank(record.identity.phone.as_deref()),
        email: is_blank(Some(&record.identity.email)),
        education_empty: record.education.is_empty(),
        work_history_empty: record.work_history.is_empty(),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}
