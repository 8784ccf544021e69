//! Typed row model for the Rirekisho's fixed-form tables.
//!
//! The physical paper form the Rirekisho imitates has a fixed number of ruled
//! lines, so the history and certification tables must be padded with blank
//! bordered rows up to a minimum regardless of how little data the record
//! carries. Building the tables as a row descriptor sequence first keeps that
//! padding algorithm testable without the docx layer.

use crate::dates::DateTokens;

/// Minimum row count for the page-1 history table, matching the ruled line
/// count of the standard paper form. Fixed, never derived from content.
pub const HISTORY_MIN_ROWS: usize = 15;

/// Minimum row count for the page-2 certifications table, same rationale.
pub const CERTIFICATION_MIN_ROWS: usize = 6;

/// One row of a year / month / entry table. The column-header row is emitted
/// by the renderer and is not counted toward the padding minimums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRow {
    /// A substantive entry: date tokens (either may be blank) plus text.
    Entry { date: DateTokens, text: String },
    /// A marker line rendered right-aligned in the entry column with blank
    /// date cells: the ongoing marker `現在に至る` or the closing `以上`.
    Marker(String),
    /// A blank bordered padding row.
    Blank,
}

impl HistoryRow {
    pub fn entry(date: DateTokens, text: impl Into<String>) -> Self {
        HistoryRow::Entry {
            date,
            text: text.into(),
        }
    }
}

/// Appends blank rows until the sequence reaches `minimum` rows. Sequences
/// already at or above the minimum are returned unchanged.
pub fn pad_to_minimum(mut rows: Vec<HistoryRow>, minimum: usize) -> Vec<HistoryRow> {
    while rows.len() < minimum {
        rows.push(HistoryRow::Blank);
    }
    rows
}
