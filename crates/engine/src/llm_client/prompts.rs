//! Prompt constants and language routing for the drafting boundary.

/// System prompt for resume drafting — enforces JSON-only output in the
/// `PersonalRecord` shape the engine consumes directly.
pub const DRAFT_SYSTEM: &str =
    "You are an expert Japanese recruitment consultant and resume writer. \
    Produce the content of a Japanese Rirekisho and Shokumu Keirekisho. \
    You MUST respond with valid JSON only, matching the schema exactly. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent employers, dates, or credentials that are not in the input.";

/// Shared `{schema}` fragment spliced into both prompt templates.
pub const SCHEMA_FRAGMENT: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{
  "identity": {
    "givenName": "Taro", "familyName": "Yamada",
    "givenNameKana": "タロウ", "familyNameKana": "ヤマダ",
    "email": "taro@example.com", "phone": "090-0000-0000",
    "address": "Tokyo, Japan", "birthDate": "1990-01-01", "gender": null
  },
  "education": [
    {"institution": "...", "credential": "...", "startPeriod": "2010-04", "endPeriod": "2014-03", "isOngoing": false}
  ],
  "workHistory": [
    {"organization": "...", "title": "...", "startPeriod": "2018-01", "endPeriod": null, "isOngoing": true,
     "narrative": "...", "achievements": ["..."]}
  ],
  "skills": ["..."],
  "certifications": ["..."],
  "languages": [{"language": "English", "proficiencyLevel": "Native"}],
  "professionalSummary": "...",
  "selfPromotion": "..."
}

Periods are "YYYY-MM". Omit endPeriod and set isOngoing for current roles.
Generate furigana (katakana) readings for the name."#;

/// Prompt for non-Japanese input: translate and localize into natural
/// business Japanese. `{identity_json}`, `{structured_json}` and
/// `{free_text}` are replaced before sending.
pub const TRANSLATE_PROMPT_TEMPLATE: &str = r#"Translate and adapt the following profile into natural business Japanese suitable for a Rirekisho and Shokumu Keirekisho.

Known identity fields (take these verbatim where present):
{identity_json}

Existing structured draft (may be null):
{structured_json}

Source profile text:
{free_text}

{schema}"#;

/// Prompt for input already in Japanese: refine wording and fill gaps
/// without translating.
pub const REFINE_PROMPT_TEMPLATE: &str = r#"The following profile is already in Japanese. Refine it into polished business Japanese for a Rirekisho and Shokumu Keirekisho without translating it to another language.

Known identity fields (take these verbatim where present):
{identity_json}

Existing structured draft (may be null):
{structured_json}

Source profile text:
{free_text}

{schema}"#;

/// Detects whether the draft input is already Japanese.
///
/// Deliberately conservative: only kana (hiragana/katakana) counts, because
/// kana is unambiguous while CJK ideographs alone could equally be Chinese.
/// Mixed-script input with no kana therefore routes to the translate prompt
/// — an acknowledged false-negative mode; both behaviors produce the same
/// output shape, so a misroute degrades wording, not structure.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
    })
}
