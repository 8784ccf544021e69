//! Renders the Shokumu Keirekisho block sequence into a docx.

use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use crate::layout::shokumu::{ShokumuBlock, CLOSING_MARKER};
use crate::layout::style::DocStyle;
use crate::render::{narrative_paragraphs, text_paragraph};

/// Lowers the block sequence one-to-one into paragraphs. No tables, no
/// padding: the document is exactly as long as its content.
pub fn render_shokumu(blocks: &[ShokumuBlock], style: &DocStyle) -> Docx {
    let mut docx = Docx::new();

    for block in blocks {
        match block {
            ShokumuBlock::Title(title) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(title).size(style.title_size).bold())
                        .align(AlignmentType::Center),
                );
            }
            ShokumuBlock::DateLine(line) | ShokumuBlock::NameLine(line) => {
                docx = docx.add_paragraph(
                    text_paragraph(line, style.body_size).align(AlignmentType::Right),
                );
            }
            ShokumuBlock::Heading(heading) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(heading).size(style.heading_size).bold()),
                );
            }
            ShokumuBlock::Paragraph(text) => {
                for paragraph in narrative_paragraphs(text, style.body_size) {
                    docx = docx.add_paragraph(paragraph);
                }
            }
            ShokumuBlock::EntryHeader {
                organization,
                title,
                period,
            } => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(organization).size(style.heading_size).bold())
                        .add_run(
                            Run::new()
                                .add_text(format!("（{period}）"))
                                .size(style.body_size),
                        ),
                );
                docx = docx.add_paragraph(text_paragraph(
                    &format!("役職：{title}"),
                    style.body_size,
                ));
            }
            ShokumuBlock::SubLabel(label) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(label).size(style.body_size).bold()),
                );
            }
            ShokumuBlock::Bullet(text) => {
                docx = docx.add_paragraph(
                    text_paragraph(&format!("・{text}"), style.body_size)
                        .indent(Some(300), None, None, None),
                );
            }
            ShokumuBlock::Closing => {
                docx = docx.add_paragraph(
                    text_paragraph(CLOSING_MARKER, style.body_size).align(AlignmentType::Right),
                );
            }
        }
    }

    docx
}
