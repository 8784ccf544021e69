//! Renders the Rirekisho layout model into a two-page docx.

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Table, TableCell, TableRow,
    VMergeType, WidthType,
};

use crate::layout::rirekisho::{
    RirekishoLayout, CERTIFICATION_HEADER, HISTORY_HEADER, PERSONAL_REQUESTS_HEADING,
    RIREKISHO_TITLE, SELF_PROMOTION_HEADING,
};
use crate::layout::style::DocStyle;
use crate::models::Identity;
use crate::photo::{FittedPhoto, EMU_PER_PX, PHOTO_PLACEHOLDER};
use crate::render::{lower_history_table, narrative_paragraphs, text_cell};

/// Lowers the layout model into the fixed two-page document. The page break
/// before the certifications table is explicit; everything after it is page 2.
pub fn render_rirekisho(
    layout: &RirekishoLayout,
    style: &DocStyle,
    photo: Option<&FittedPhoto>,
) -> Docx {
    let mut docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(RIREKISHO_TITLE).size(style.title_size).bold())
                .align(AlignmentType::Center),
        )
        .add_table(identity_table(&layout.identity, style, photo))
        .add_paragraph(Paragraph::new())
        .add_table(lower_history_table(&layout.history, HISTORY_HEADER, style))
        // Page 2.
        .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
        .add_table(lower_history_table(
            &layout.certifications,
            CERTIFICATION_HEADER,
            style,
        ))
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading(SELF_PROMOTION_HEADING, style));

    for paragraph in narrative_paragraphs(&layout.self_promotion, style.body_size) {
        docx = docx.add_paragraph(paragraph);
    }

    docx = docx.add_paragraph(heading(PERSONAL_REQUESTS_HEADING, style));
    for paragraph in narrative_paragraphs(&layout.personal_requests, style.body_size) {
        docx = docx.add_paragraph(paragraph);
    }

    docx
}

fn heading(text: &str, style: &DocStyle) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(style.heading_size).bold())
}

/// Identity grid: label/value rows with the photo cell vertically merged
/// alongside the first four rows, then full-width contact rows.
fn identity_table(identity: &Identity, style: &DocStyle, photo: Option<&FittedPhoto>) -> Table {
    let kana = match (&identity.family_name_kana, &identity.given_name_kana) {
        (Some(family), Some(given)) => format!("{family} {given}"),
        (Some(family), None) => family.clone(),
        (None, Some(given)) => given.clone(),
        (None, None) => String::new(),
    };
    let full_name = format!("{} {}", identity.family_name, identity.given_name);

    let labelled = |label: &str, value: &str, value_size: usize| {
        vec![
            text_cell(label, style.body_size, style.label_col_dxa),
            text_cell(value, value_size, style.value_col_dxa),
        ]
    };

    let merged = |cells: Vec<TableCell>| {
        let mut cells = cells;
        cells.push(
            TableCell::new()
                .width(style.photo_col_dxa, WidthType::Dxa)
                .vertical_merge(VMergeType::Continue)
                .add_paragraph(Paragraph::new()),
        );
        TableRow::new(cells)
    };

    let spanning = |label: &str, value: &str| {
        TableRow::new(vec![
            text_cell(label, style.body_size, style.label_col_dxa),
            text_cell(value, style.body_size, style.value_col_dxa + style.photo_col_dxa)
                .grid_span(2),
        ])
    };

    let mut first_row = labelled("ふりがな", &kana, style.body_size);
    first_row.push(photo_cell(style, photo));

    Table::new(vec![
        TableRow::new(first_row),
        merged(labelled("氏名", &full_name, style.name_size)),
        merged(labelled(
            "生年月日",
            identity.birth_date.as_deref().unwrap_or(""),
            style.body_size,
        )),
        merged(labelled(
            "性別",
            identity.gender.as_deref().unwrap_or(""),
            style.body_size,
        )),
        spanning("現住所", identity.address.as_deref().unwrap_or("")),
        spanning("電話", identity.phone.as_deref().unwrap_or("")),
        spanning("Email", &identity.email),
    ])
    .set_grid(vec![
        style.label_col_dxa,
        style.value_col_dxa,
        style.photo_col_dxa,
    ])
}

/// The photo frame: the fitted image when one decoded, the placeholder glyph
/// otherwise. Vertical-merge anchor for the rows beside it.
fn photo_cell(style: &DocStyle, photo: Option<&FittedPhoto>) -> TableCell {
    let content = match photo {
        Some(fitted) => Paragraph::new()
            .add_run(
                Run::new().add_image(
                    Pic::new(&fitted.bytes).size(
                        fitted.width_px * EMU_PER_PX,
                        fitted.height_px * EMU_PER_PX,
                    ),
                ),
            )
            .align(AlignmentType::Center),
        None => Paragraph::new()
            .add_run(Run::new().add_text(PHOTO_PLACEHOLDER).size(style.body_size))
            .align(AlignmentType::Center),
    };

    TableCell::new()
        .width(style.photo_col_dxa, WidthType::Dxa)
        .vertical_merge(VMergeType::Restart)
        .add_paragraph(content)
}
