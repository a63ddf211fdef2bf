use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::{FailureKind, LlmError};
use crate::models::GenerationStatus;

/// A generated blog post, or the record of a failed attempt to generate one.
///
/// `word_count` counts whitespace-delimited tokens across the title and the
/// body together, so title words are included in the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub topic: String,
    pub target_audience: String,
    pub word_count: usize,
    pub generated_at: DateTime<Utc>,
    pub status: GenerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
}

impl BlogPost {
    /// Error record: empty title, body and tags, with the failure message and kind.
    pub fn failed(topic: &str, target_audience: &str, error: &LlmError) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            topic: topic.to_string(),
            target_audience: target_audience.to_string(),
            word_count: 0,
            generated_at: Utc::now(),
            status: GenerationStatus::Error,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GenerationStatus::Success
    }
}
