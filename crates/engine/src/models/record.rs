//! The normalized personal-history record and its derived types.
//!
//! `PersonalRecord` is the sole input to document generation. It is owned by
//! the caller and passed by reference; the engine never mutates or re-sorts
//! it — `education` and `work_history` render in the order given.
//!
//! Field names are camelCase on the wire so the generative service's JSON
//! payload deserializes directly into this type with no extra coercion.

use serde::{Deserialize, Serialize};

/// The normalized record a pair of employment documents is generated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub identity: Identity,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub work_history: Vec<WorkEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub self_promotion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Phonetic (furigana) readings, typically produced by the draft service.
    #[serde(default)]
    pub given_name_kana: Option<String>,
    #[serde(default)]
    pub family_name_kana: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Face photo as a data URL (`data:image/...;base64,...`). Consumed
    /// read-only; decode failures degrade to the placeholder cell.
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    #[serde(default)]
    pub credential: Option<String>,
    /// Year-month string (`"2010-04"`), or absent.
    #[serde(default)]
    pub start_period: Option<String>,
    /// Semantically absent when `is_ongoing` is true.
    #[serde(default)]
    pub end_period: Option<String>,
    #[serde(default)]
    pub is_ongoing: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub organization: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_period: Option<String>,
    #[serde(default)]
    pub end_period: Option<String>,
    #[serde(default)]
    pub is_ongoing: bool,
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSkill {
    pub language: String,
    /// e.g. "Native", "Business", "Conversational (N4)".
    #[serde(default)]
    pub proficiency_level: String,
}

/// Which required fields are absent from a record. A flag is `true` when the
/// field is missing (absent, empty, or whitespace-only). Recomputed fresh on
/// every generation call; advisory only — never blocks the download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub birth_date: bool,
    pub address: bool,
    pub phone: bool,
    pub email: bool,
    pub education_empty: bool,
    pub work_history_empty: bool,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        self.birth_date
            || self.address
            || self.phone
            || self.email
            || self.education_empty
            || self.work_history_empty
    }
}

/// One serialized document plus its fixed logical filename. Exists only for
/// the duration of a single generation call, owned by the archive packager
/// until handed to the caller.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// The caller-facing result of one generation call.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Zip archive holding exactly the two generated documents.
    pub archive: Vec<u8>,
    pub validation: ValidationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_from_camel_case_payload() {
        // Shape of the generative service's JSON payload.
        let json = serde_json::json!({
            "identity": {
                "givenName": "Taro",
                "familyName": "Yamada",
                "givenNameKana": "タロウ",
                "familyNameKana": "ヤマダ",
                "email": "taro.yamada@example.com",
                "phone": "090-1234-5678",
                "birthDate": "1990-01-01"
            },
            "education": [{
                "institution": "Sample University",
                "startPeriod": "2010-04",
                "endPeriod": "2014-03",
                "isOngoing": false
            }],
            "workHistory": [{
                "organization": "Acme Corp",
                "title": "Senior Software Engineer",
                "startPeriod": "2018-01",
                "isOngoing": true,
                "narrative": "Led a team of 5 developers.",
                "achievements": ["Improved performance by 30%"]
            }],
            "skills": ["Rust", "TypeScript"],
            "professionalSummary": "Experienced engineer.",
            "selfPromotion": "Proactive problem solver."
        });

        let record: PersonalRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.identity.family_name, "Yamada");
        assert_eq!(record.identity.family_name_kana.as_deref(), Some("ヤマダ"));
        assert_eq!(record.education[0].end_period.as_deref(), Some("2014-03"));
        assert!(record.work_history[0].is_ongoing);
        assert!(record.work_history[0].end_period.is_none());
        assert!(record.certifications.is_empty());
    }

    #[test]
    fn test_missing_optional_sections_default_to_empty() {
        let json = serde_json::json!({
            "identity": { "givenName": "A", "familyName": "B", "email": "a@b.c" }
        });
        let record: PersonalRecord = serde_json::from_value(json).unwrap();
        assert!(record.education.is_empty());
        assert!(record.work_history.is_empty());
        assert!(record.professional_summary.is_empty());
    }

    #[test]
    fn test_validation_report_warning_aggregation() {
        let mut report = ValidationReport::default();
        assert!(!report.has_warnings());
        report.phone = true;
        assert!(report.has_warnings());
    }
}
