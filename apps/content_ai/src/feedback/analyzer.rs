//! Feedback Analyzer: sentiment labels and theme summaries over user feedback.
//!
//! The string-returning operations never fail: a client error comes back as
//! `"Error: <message>"`. The `try_` variants return the typed `LlmError`.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::feedback::prompts::{
    build_sentiment_prompt, build_themes_prompt, SENTIMENT_MAX_TOKENS, SENTIMENT_SYSTEM,
    SENTIMENT_TEMPERATURE, THEMES_MAX_TOKENS, THEMES_SYSTEM, THEMES_TEMPERATURE,
};
use crate::llm_client::{ChatCompletion, ChatRequest, LlmClient, LlmError};

#[derive(Clone)]
pub struct FeedbackAnalyzer {
    llm: Arc<dyn ChatCompletion>,
    model: String,
}

impl FeedbackAnalyzer {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let llm = LlmClient::from_config(config)?;
        Ok(Self::with_client(Arc::new(llm), config.model.clone()))
    }

    pub fn with_client(llm: Arc<dyn ChatCompletion>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Returns the model's label trimmed but otherwise unmodified. Expected to be
    /// Positive, Negative or Neutral, though nothing enforces it.
    pub async fn analyze_sentiment(&self, text: &str) -> String {
        self.try_analyze_sentiment(text)
            .await
            .unwrap_or_else(|e| {
                error!("Sentiment analysis failed: {e}");
                error_text(&e)
            })
    }

    pub async fn try_analyze_sentiment(&self, text: &str) -> Result<String, LlmError> {
        let request = ChatRequest::new(
            &self.model,
            SENTIMENT_SYSTEM,
            build_sentiment_prompt(text),
            SENTIMENT_MAX_TOKENS,
            SENTIMENT_TEMPERATURE,
        );

        let reply = self.llm.complete(&request).await?;
        let label = reply.trim().to_string();
        info!("Sentiment: {label}");
        Ok(label)
    }

    /// Returns the model's free-text theme summary, trimmed.
    pub async fn identify_key_themes<S: AsRef<str>>(&self, feedback: &[S]) -> String {
        self.try_identify_key_themes(feedback)
            .await
            .unwrap_or_else(|e| {
                error!("Theme identification failed: {e}");
                error_text(&e)
            })
    }

    pub async fn try_identify_key_themes<S: AsRef<str>>(
        &self,
        feedback: &[S],
    ) -> Result<String, LlmError> {
        let request = ChatRequest::new(
            &self.model,
            THEMES_SYSTEM,
            build_themes_prompt(feedback),
            THEMES_MAX_TOKENS,
            THEMES_TEMPERATURE,
        );

        let reply = self.llm.complete(&request).await?;
        info!("Identified themes across {} feedback entries", feedback.len());
        Ok(reply.trim().to_string())
    }
}

fn error_text(e: &LlmError) -> String {
    format!("Error: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Sentiment;
    use crate::llm_client::testing::ScriptedClient;

    fn analyzer(client: &Arc<ScriptedClient>) -> FeedbackAnalyzer {
        FeedbackAnalyzer::with_client(client.clone(), "gpt-3.5-turbo")
    }

    #[tokio::test]
    async fn test_analyze_sentiment_returns_reply() {
        let client = Arc::new(ScriptedClient::replying("Positive"));
        let sentiment = analyzer(&client)
            .analyze_sentiment("This is a great app!")
            .await;

        assert_eq!(sentiment, "Positive");
        assert_eq!(Sentiment::from_label(&sentiment), Some(Sentiment::Positive));
    }

    #[tokio::test]
    async fn test_analyze_sentiment_trims_but_passes_through_any_text() {
        let client = Arc::new(ScriptedClient::replying("  Mixed, leaning positive\n"));
        let sentiment = analyzer(&client).analyze_sentiment("meh").await;
        assert_eq!(sentiment, "Mixed, leaning positive");
    }

    #[tokio::test]
    async fn test_analyze_sentiment_request_parameters() {
        let client = Arc::new(ScriptedClient::replying("Neutral"));
        analyzer(&client).analyze_sentiment("It works.").await;

        let sent = client.last_request();
        assert_eq!(sent.max_tokens, 10);
        assert_eq!(sent.temperature, 0.0);
        assert_eq!(sent.system_prompt(), Some("You are a sentiment analysis expert."));
        assert!(sent.user_prompt().unwrap().contains("\"It works.\""));
    }

    #[tokio::test]
    async fn test_analyze_sentiment_error_is_prefixed_string() {
        let client = Arc::new(ScriptedClient::failing(500, "API Error"));
        let sentiment = analyzer(&client).analyze_sentiment("anything").await;

        assert!(sentiment.starts_with("Error: "));
        assert!(sentiment.contains("API Error"));
    }

    #[tokio::test]
    async fn test_try_analyze_sentiment_returns_typed_error() {
        let client = Arc::new(ScriptedClient::failing(401, "Incorrect API key"));
        let err = analyzer(&client)
            .try_analyze_sentiment("anything")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::llm_client::FailureKind::Authentication);
    }

    #[tokio::test]
    async fn test_identify_key_themes_returns_summary() {
        let client = Arc::new(ScriptedClient::replying(
            "Key Themes:\n- Login Issues\n- Billing Problems",
        ));
        let themes = analyzer(&client)
            .identify_key_themes(&["Can't log in.", "I was double charged."])
            .await;

        assert!(themes.contains("Login Issues"));
        assert!(themes.contains("Billing Problems"));
    }

    #[tokio::test]
    async fn test_identify_key_themes_request_parameters() {
        let client = Arc::new(ScriptedClient::replying("Themes"));
        let feedback = vec!["Slow sync".to_string(), "Love dark mode".to_string()];
        analyzer(&client).identify_key_themes(&feedback).await;

        let sent = client.last_request();
        assert_eq!(sent.max_tokens, 500);
        assert!((sent.temperature - 0.5).abs() < f32::EPSILON);
        assert!(sent.system_prompt().unwrap().contains("theme identification"));
        assert!(sent
            .user_prompt()
            .unwrap()
            .ends_with("- Slow sync\n- Love dark mode"));
    }

    #[tokio::test]
    async fn test_identify_key_themes_error_is_prefixed_string() {
        let client = Arc::new(ScriptedClient::default().then_fail(LlmError::MissingApiKey));
        let themes = analyzer(&client).identify_key_themes(&["x"]).await;
        assert!(themes.starts_with("Error: No API key configured"));
    }
}
