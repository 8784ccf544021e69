// Layout engines for the two employment documents.
// Each engine produces a typed intermediate model (rows for the fixed-form
// Rirekisho tables, blocks for the free-form Shokumu Keirekisho) so the
// padding and sectioning logic is testable without touching the docx layer.
// The render module lowers these models into the document format.

pub mod rirekisho;
pub mod rows;
pub mod shokumu;
pub mod style;

pub use rirekisho::{rirekisho_layout, RirekishoLayout, RirekishoOptions};
pub use rows::{pad_to_minimum, HistoryRow, CERTIFICATION_MIN_ROWS, HISTORY_MIN_ROWS};
pub use shokumu::{shokumu_blocks, ShokumuBlock};
pub use style::DocStyle;
