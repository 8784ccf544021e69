// Core data model: the normalized personal-history record supplied by the
// caller, plus the ephemeral derived types handed back from generation.

pub mod record;

pub use record::{
    EducationEntry, GeneratedDocument, GenerationOutput, Identity, LanguageSkill, PersonalRecord,
    ValidationReport, WorkEntry,
};
