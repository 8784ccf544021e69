//! End-to-end generation scenarios exercised through the public API plus the
//! layout models.

use std::io::{Cursor, Read, Write};

use chrono::NaiveDate;

use engine::dates::ONGOING_MARKER;
use engine::layout::rirekisho::{certification_rows, history_rows, CLOSING_MARKER};
use engine::layout::shokumu::{shokumu_blocks, ShokumuBlock, ACHIEVEMENTS_LABEL, SKILLS_HEADING};
use engine::layout::{HistoryRow, CERTIFICATION_MIN_ROWS, HISTORY_MIN_ROWS};
use engine::{
    generate_documents_at, EducationEntry, PersonalRecord, WorkEntry, RIREKISHO_FILENAME,
    SHOKUMU_FILENAME,
};

/// One education entry, one ongoing work entry with two achievements, three
/// skills, no photo, no certifications.
fn scenario_record() -> PersonalRecord {
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
        title: "Senior Engineer".to_string(),
        start_period: Some("2018-01".to_string()),
        is_ongoing: true,
        narrative: "Led the platform team end to end.".to_string(),
        achievements: vec![
            "Cut infrastructure cost by 25%".to_string(),
            "Introduced CI for 4 teams".to_string(),
        ],
        ..Default::default()
    });
    record.skills = vec![
        "Rust".to_string(),
        "PostgreSQL".to_string(),
        "AWS".to_string(),
    ];
    record.professional_summary = "Engineer with 8 years of experience.".to_string();
    record.self_promotion = "Proactive and collaborative.".to_string();
    record
}

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

#[tokio::test]
async fn archive_contains_exactly_the_two_documents() {
    let output = generate_documents_at(&scenario_record(), fixed_date())
        .await
        .unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(output.archive)).unwrap();
    assert_eq!(archive.len(), 2);

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec![RIREKISHO_FILENAME, SHOKUMU_FILENAME]);

    // Each entry is a real docx payload (itself a zip container).
    for name in [RIREKISHO_FILENAME, SHOKUMU_FILENAME] {
        let mut bytes = Vec::new();
        archive.by_name(name).unwrap().read_to_end(&mut bytes).unwrap();
        assert_eq!(&bytes[..2], b"PK", "{name} is not a zip container");
    }
}

#[tokio::test]
async fn archive_survives_a_disk_round_trip() {
    let output = generate_documents_at(&scenario_record(), fixed_date())
        .await
        .unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&output.archive).unwrap();
    let reopened = std::fs::File::open(file.path()).unwrap();
    let archive = zip::ZipArchive::new(reopened).unwrap();
    assert_eq!(archive.len(), 2);
}

#[test]
fn history_table_has_four_substantive_rows_padded_to_minimum() {
    let rows = history_rows(&scenario_record());
    assert_eq!(rows.len(), HISTORY_MIN_ROWS);

    let substantive: Vec<&HistoryRow> = rows
        .iter()
        .filter(|r| !matches!(r, HistoryRow::Blank))
        .collect();
    // enter/exit pair for the university, join row for Acme, ongoing marker,
    // plus the closing marker.
    assert_eq!(substantive.len(), 5);
    assert_eq!(
        *substantive[3],
        HistoryRow::Marker(ONGOING_MARKER.to_string())
    );
    assert_eq!(
        *substantive[4],
        HistoryRow::Marker(CLOSING_MARKER.to_string())
    );
}

#[test]
fn empty_certifications_still_pad_to_minimum() {
    let rows = certification_rows(&scenario_record());
    assert_eq!(rows.len(), CERTIFICATION_MIN_ROWS);
    assert!(rows.iter().all(|r| *r == HistoryRow::Blank));
}

#[test]
fn shokumu_has_one_entry_block_with_two_achievement_bullets() {
    let blocks = shokumu_blocks(&scenario_record(), fixed_date());

    let entry_headers = blocks
        .iter()
        .filter(|b| matches!(b, ShokumuBlock::EntryHeader { .. }))
        .count();
    assert_eq!(entry_headers, 1);

    // Bullets between the achievements label and the skills heading.
    let achievements_at = blocks
        .iter()
        .position(|b| *b == ShokumuBlock::SubLabel(ACHIEVEMENTS_LABEL.to_string()))
        .unwrap();
    let skills_at = blocks
        .iter()
        .position(|b| *b == ShokumuBlock::Heading(SKILLS_HEADING.to_string()))
        .unwrap();
    let achievement_bullets = blocks[achievements_at..skills_at]
        .iter()
        .filter(|b| matches!(b, ShokumuBlock::Bullet(_)))
        .count();
    assert_eq!(achievement_bullets, 2);

    // Three skills render as three bullets after the skills heading.
    let skill_bullets = blocks[skills_at..]
        .iter()
        .filter(|b| matches!(b, ShokumuBlock::Bullet(_)))
        .count();
    assert_eq!(skill_bullets, 3);
}

#[tokio::test]
async fn repeated_generation_is_structurally_identical() {
    let record = scenario_record();
    let first = generate_documents_at(&record, fixed_date()).await.unwrap();
    let second = generate_documents_at(&record, fixed_date()).await.unwrap();
    assert_eq!(first.archive, second.archive);
    assert_eq!(first.validation, second.validation);
}

#[tokio::test]
async fn validation_report_rides_along_without_blocking() {
    let output = generate_documents_at(&scenario_record(), fixed_date())
        .await
        .unwrap();
    // No phone/address/birth date in the scenario record.
    assert!(output.validation.phone);
    assert!(output.validation.address);
    assert!(output.validation.birth_date);
    assert!(!output.validation.email);
    assert!(!output.validation.education_empty);
    assert!(!output.validation.work_history_empty);
}
