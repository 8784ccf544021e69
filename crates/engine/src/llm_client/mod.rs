//! LLM client — the single point of entry for all generative-text calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Anthropic API directly.
//! The document engines consume only the `PersonalRecord` this boundary
//! returns; there is no additional coercion beyond optional-field defaulting.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod prompts;

use crate::config::Config;
use crate::errors::EngineError;
use crate::models::{EducationEntry, Identity, LanguageSkill, PersonalRecord, WorkEntry};
use prompts::{
    contains_japanese, DRAFT_SYSTEM, REFINE_PROMPT_TEMPLATE, SCHEMA_FRAGMENT,
    TRANSLATE_PROMPT_TEMPLATE,
};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded to prevent accidental model drift between environments.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API with transport-level retry and a
/// structured-JSON helper. Transport retries are this boundary's own
/// contract; the generation pipeline itself never retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the API, retrying 429 and 5xx responses with
    /// exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM and deserializes the text response as JSON. The prompt
    /// must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        let text = strip_json_fences(text);
        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drafting boundary
// ────────────────────────────────────────────────────────────────────────────

/// Input to the drafting service: an identity subset supplied by the form,
/// plus free text (extracted or typed) and/or an existing structured draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub identity: Option<IdentitySeed>,
    #[serde(default)]
    pub free_text: Option<String>,
    #[serde(default)]
    pub structured_draft: Option<PersonalRecord>,
}

/// Identity fields the caller already knows. These take precedence over
/// whatever the model returns — in particular the photo payload, which the
/// model never produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySeed {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Pluggable drafting service. Implementations must return a fully-shaped
/// `PersonalRecord`; the engine applies no coercion beyond serde defaults.
#[async_trait]
pub trait ResumeDrafter: Send + Sync {
    async fn draft(&self, request: &DraftRequest) -> Result<PersonalRecord, EngineError>;
}

/// Drafter backed by the Anthropic Messages API.
///
/// Japanese-language input is refined in place; anything else is translated
/// into business Japanese. Routing uses a kana-presence heuristic (see
/// `prompts::contains_japanese`) — the two behaviors stay distinguishable in
/// the prompt choice, which is logged.
pub struct LlmDrafter {
    client: LlmClient,
}

impl LlmDrafter {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(LlmClient::new(config.anthropic_api_key.clone()))
    }
}

#[async_trait]
impl ResumeDrafter for LlmDrafter {
    async fn draft(&self, request: &DraftRequest) -> Result<PersonalRecord, EngineError> {
        let free_text = request.free_text.as_deref().unwrap_or("");
        let template = if contains_japanese(free_text) {
            info!("Draft input detected as Japanese — refining in place");
            REFINE_PROMPT_TEMPLATE
        } else {
            info!("Draft input not detected as Japanese — translating");
            TRANSLATE_PROMPT_TEMPLATE
        };

        let identity_json = serde_json::to_string(&request.identity)
            .map_err(|e| EngineError::Llm(format!("Failed to serialize identity seed: {e}")))?;
        let draft_json = serde_json::to_string(&request.structured_draft)
            .map_err(|e| EngineError::Llm(format!("Failed to serialize draft: {e}")))?;

        let prompt = template
            .replace("{identity_json}", &identity_json)
            .replace("{structured_json}", &draft_json)
            .replace("{free_text}", free_text)
            .replace("{schema}", SCHEMA_FRAGMENT);

        let mut record: PersonalRecord = self
            .client
            .call_json(&prompt, DRAFT_SYSTEM)
            .await
            .map_err(|e| EngineError::Llm(format!("Draft call failed: {e}")))?;

        apply_identity_seed(&mut record.identity, request.identity.as_ref());
        Ok(record)
    }
}

/// Caller-supplied identity fields win over model output. The photo payload
/// in particular never round-trips through the model.
fn apply_identity_seed(identity: &mut Identity, seed: Option<&IdentitySeed>) {
    let Some(seed) = seed else { return };
    if let Some(given) = &seed.given_name {
        identity.given_name = given.clone();
    }
    if let Some(family) = &seed.family_name {
        identity.family_name = family.clone();
    }
    if let Some(email) = &seed.email {
        identity.email = email.clone();
    }
    if seed.photo.is_some() {
        identity.photo = seed.photo.clone();
    }
}

/// Fixture-backed drafter for local development and tests. Returns a stable
/// record regardless of input, with the identity seed applied.
pub struct MockDrafter;

#[async_trait]
impl ResumeDrafter for MockDrafter {
    async fn draft(&self, request: &DraftRequest) -> Result<PersonalRecord, EngineError> {
        let mut record = mock_record();
        apply_identity_seed(&mut record.identity, request.identity.as_ref());
        Ok(record)
    }
}

/// Selects the drafting implementation: `DRAFT_PROVIDER=mock` for the
/// fixture, anything else for the live API.
pub fn drafter_from_config(config: &Config) -> Arc<dyn ResumeDrafter> {
    if config.draft_provider == "mock" {
        Arc::new(MockDrafter)
    } else {
        Arc::new(LlmDrafter::from_config(config))
    }
}

fn mock_record() -> PersonalRecord {
    PersonalRecord {
        identity: Identity {
            given_name: "Taro".to_string(),
            family_name: "Yamada".to_string(),
            given_name_kana: Some("タロウ".to_string()),
            family_name_kana: Some("ヤマダ".to_string()),
            email: "taro.yamada@example.com".to_string(),
            phone: Some("090-1234-5678".to_string()),
            address: Some("Tokyo, Japan".to_string()),
            birth_date: Some("1990-01-01".to_string()),
            gender: None,
            photo: None,
        },
        education: vec![EducationEntry {
            institution: "Sample University".to_string(),
            credential: Some("Bachelor of Computer Science".to_string()),
            start_period: Some("2010-04".to_string()),
            end_period: Some("2014-03".to_string()),
            is_ongoing: false,
        }],
        work_history: vec![WorkEntry {
            organization: "Tech Solutions Inc.".to_string(),
            title: "Senior Software Engineer".to_string(),
            start_period: Some("2018-01".to_string()),
            end_period: None,
            is_ongoing: true,
            narrative: "Led a team of 5 developers building a cloud-based CRM system."
                .to_string(),
            achievements: vec![
                "Improved system performance by 30% via code optimization.".to_string(),
                "Mentored junior developers in Agile practices.".to_string(),
            ],
        }],
        skills: vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "AWS".to_string(),
        ],
        certifications: vec!["AWS Certified Solutions Architect".to_string()],
        languages: vec![
            LanguageSkill {
                language: "English".to_string(),
                proficiency_level: "Native".to_string(),
            },
            LanguageSkill {
                language: "Japanese".to_string(),
                proficiency_level: "Conversational (N4)".to_string(),
            },
        ],
        professional_summary: "Experienced engineer with 8 years of full-stack expertise."
            .to_string(),
        self_promotion: "Proactive problem solver eager to contribute to a Japanese company."
            .to_string(),
    }
}
