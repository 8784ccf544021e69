//! Lowers the layout models into docx and serializes them.
//!
//! All layout decisions (padding, ordering, marker substitution) happen in
//! the layout module; this layer is a mechanical translation into the
//! document library's paragraph/table API plus the binary pack step. The
//! pack step is the only fallible operation and is fatal per the error
//! policy — no partial documents are ever returned.

pub mod rirekisho;
pub mod shokumu;

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Table, TableCell, TableRow, WidthType,
};

use crate::errors::EngineError;
use crate::layout::rows::HistoryRow;
use crate::layout::style::DocStyle;

pub use rirekisho::render_rirekisho;
pub use shokumu::render_shokumu;

/// Serializes a built document into its binary payload.
pub fn serialize_docx(docx: Docx) -> Result<Vec<u8>, EngineError> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| EngineError::Serialization(e.to_string()))?;
    Ok(cursor.into_inner())
}

pub(crate) fn text_paragraph(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(size))
}

pub(crate) fn text_cell(text: &str, size: usize, width_dxa: usize) -> TableCell {
    TableCell::new()
        .width(width_dxa, WidthType::Dxa)
        .add_paragraph(text_paragraph(text, size))
}

/// Lowers a year/month/entry row sequence into a bordered table, prepending
/// the column-header row. Marker rows render right-aligned in the entry
/// column with blank date cells; blank rows keep their borders so the padded
/// form matches the ruled paper layout.
pub(crate) fn lower_history_table(
    rows: &[HistoryRow],
    header: [&str; 3],
    style: &DocStyle,
) -> Table {
    let widths = [style.year_col_dxa, style.month_col_dxa, style.entry_col_dxa];

    let mut table_rows = vec![TableRow::new(vec![
        header_cell(header[0], style, widths[0]),
        header_cell(header[1], style, widths[1]),
        header_cell(header[2], style, widths[2]),
    ])];

    for row in rows {
        table_rows.push(match row {
            HistoryRow::Entry { date, text } => TableRow::new(vec![
                text_cell(&date.year, style.body_size, widths[0]),
                text_cell(&date.month, style.body_size, widths[1]),
                text_cell(text, style.body_size, widths[2]),
            ]),
            HistoryRow::Marker(marker) => TableRow::new(vec![
                text_cell("", style.body_size, widths[0]),
                text_cell("", style.body_size, widths[1]),
                TableCell::new()
                    .width(widths[2], WidthType::Dxa)
                    .add_paragraph(
                        text_paragraph(marker, style.body_size).align(AlignmentType::Right),
                    ),
            ]),
            HistoryRow::Blank => TableRow::new(vec![
                text_cell("", style.body_size, widths[0]),
                text_cell("", style.body_size, widths[1]),
                text_cell("", style.body_size, widths[2]),
            ]),
        });
    }

    Table::new(table_rows).set_grid(widths.to_vec())
}

fn header_cell(label: &str, style: &DocStyle, width_dxa: usize) -> TableCell {
    TableCell::new()
        .width(width_dxa, WidthType::Dxa)
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(label).size(style.body_size).bold())
                .align(AlignmentType::Center),
        )
}

/// Splits a narrative on newlines into one paragraph per line so multi-line
/// prose from the draft service keeps its breaks.
pub(crate) fn narrative_paragraphs(text: &str, size: usize) -> Vec<Paragraph> {
    text.split('\n')
        .map(|line| text_paragraph(line, size))
        .collect()
}
