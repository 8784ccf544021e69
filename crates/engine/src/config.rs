use anyhow::Result;

/// Configuration for the collaborator boundaries, loaded from environment
/// variables. The document engines themselves take no env config — their
/// style is an explicitly constructed `DocStyle`.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// `"anthropic"` (default) or `"mock"` — selects the drafting backend.
    pub draft_provider: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let draft_provider =
            std::env::var("DRAFT_PROVIDER").unwrap_or_else(|_| "anthropic".to_string());

        // The API key is only required when the live backend is selected.
        let anthropic_api_key = if draft_provider == "mock" {
            std::env::var("ANTHROPIC_API_KEY").unwrap_or_default()
        } else {
            require_env("ANTHROPIC_API_KEY")?
        };

        Ok(Config {
            anthropic_api_key,
            draft_provider,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    use anyhow::Context;
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
