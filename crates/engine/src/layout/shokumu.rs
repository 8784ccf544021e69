//! Shokumu Keirekisho layout engine.
//!
//! Unlike the Rirekisho, this document follows no fixed-paper-form
//! convention: it is a single continuous page exactly as long as its content,
//! with a fixed section order. The engine emits a flat block sequence the
//! renderer lowers one-to-one.

use chrono::{Datelike, NaiveDate};

use crate::dates::{display_period, PRESENT_LABEL};
use crate::models::{PersonalRecord, WorkEntry};

pub const SHOKUMU_TITLE: &str = "職務経歴書";

pub const SUMMARY_HEADING: &str = "■ 職務要約";
pub const WORK_HISTORY_HEADING: &str = "■ 職務経歴";
pub const SKILLS_HEADING: &str = "■ 活かせるスキル";
pub const SELF_PROMOTION_HEADING: &str = "■ 自己PR";

pub const DUTIES_LABEL: &str = "【職務内容】";
pub const ACHIEVEMENTS_LABEL: &str = "【実績】";

/// Right-aligned closing marker ending the document.
pub const CLOSING_MARKER: &str = "以上";

/// One block of the free-form document, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShokumuBlock {
    /// Centered document title.
    Title(String),
    /// Right-aligned "as of" date line.
    DateLine(String),
    /// Right-aligned identity line.
    NameLine(String),
    /// `■`-prefixed section heading.
    Heading(String),
    /// Body paragraph.
    Paragraph(String),
    /// Bold entry header for one work-history entry.
    EntryHeader {
        organization: String,
        title: String,
        period: String,
    },
    /// `【…】` sub-block label inside an entry.
    SubLabel(String),
    /// A `・`-bulleted line (achievement or skill).
    Bullet(String),
    /// Right-aligned closing marker.
    Closing,
}

/// Builds the block sequence for the whole document. Section order is fixed:
/// header → summary → work history → skills → self-promotion → closing.
pub fn shokumu_blocks(record: &PersonalRecord, today: NaiveDate) -> Vec<ShokumuBlock> {
    let mut blocks = vec![
        ShokumuBlock::Title(SHOKUMU_TITLE.to_string()),
        ShokumuBlock::DateLine(format!(
            "{}年{}月{}日現在",
            today.year(),
            today.month(),
            today.day()
        )),
        ShokumuBlock::NameLine(format!(
            "氏名　{} {}",
            record.identity.family_name, record.identity.given_name
        )),
    ];

    blocks.push(ShokumuBlock::Heading(SUMMARY_HEADING.to_string()));
    blocks.push(ShokumuBlock::Paragraph(record.professional_summary.clone()));

    blocks.push(ShokumuBlock::Heading(WORK_HISTORY_HEADING.to_string()));
    for entry in &record.work_history {
        push_work_entry(&mut blocks, entry);
    }

    blocks.push(ShokumuBlock::Heading(SKILLS_HEADING.to_string()));
    for skill in &record.skills {
        blocks.push(ShokumuBlock::Bullet(skill.clone()));
    }

    blocks.push(ShokumuBlock::Heading(SELF_PROMOTION_HEADING.to_string()));
    blocks.push(ShokumuBlock::Paragraph(record.self_promotion.clone()));

    blocks.push(ShokumuBlock::Closing);
    blocks
}

fn push_work_entry(blocks: &mut Vec<ShokumuBlock>, entry: &WorkEntry) {
    let start = display_period(entry.start_period.as_deref());
    let end = if entry.is_ongoing {
        PRESENT_LABEL.to_string()
    } else {
        display_period(entry.end_period.as_deref())
    };

    blocks.push(ShokumuBlock::EntryHeader {
        organization: entry.organization.clone(),
        title: entry.title.clone(),
        period: format!("{start}～{end}"),
    });

    blocks.push(ShokumuBlock::SubLabel(DUTIES_LABEL.to_string()));
    blocks.push(ShokumuBlock::Paragraph(entry.narrative.clone()));

    // The achievements sub-block is omitted entirely when empty, not blank.
    if !entry.achievements.is_empty() {
        blocks.push(ShokumuBlock::SubLabel(ACHIEVEMENTS_LABEL.to_string()));
        for achievement in &entry.achievements {
            blocks.push(ShokumuBlock::Bullet(achievement.clone()));
        }
    }
}
