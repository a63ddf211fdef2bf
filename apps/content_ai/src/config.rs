use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_OUTPUT_PATH: &str = "ai_content_examples.json";

/// Application configuration loaded from environment variables.
///
/// The API key is optional: without it every component still constructs,
/// and each call fails at the client boundary with an authentication error.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub output_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| {
                    format!("LLM_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            openai_api_key: non_empty(lookup("OPENAI_API_KEY")),
            openai_base_url: non_empty(lookup("OPENAI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(lookup("OPENAI_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout_secs,
            output_path: non_empty(lookup("OUTPUT_PATH"))
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// An explicitly supplied key wins over whatever the environment held.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = non_empty(api_key) {
            self.openai_api_key = Some(key);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            rust_log: "info".to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
