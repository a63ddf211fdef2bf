use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::{FailureKind, LlmError};
use crate::models::GenerationStatus;

/// One blog post idea from a content calendar. An idea exists only if its
/// segment had a `Title:` line, though that line may carry an empty title.
/// The other fields default to empty when the reply omitted them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub description: String,
    pub audience: String,
    pub level: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCalendar {
    pub niche: String,
    /// How many ideas were asked for. Not enforced against `ideas`.
    pub requested_count: u32,
    pub total_ideas: usize,
    pub ideas: Vec<ContentIdea>,
    pub generated_at: DateTime<Utc>,
    pub status: GenerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
}

impl ContentCalendar {
    pub fn new(niche: &str, requested_count: u32, ideas: Vec<ContentIdea>) -> Self {
        Self {
            niche: niche.to_string(),
            requested_count,
            total_ideas: ideas.len(),
            ideas,
            generated_at: Utc::now(),
            status: GenerationStatus::Success,
            error: None,
            error_kind: None,
        }
    }

    pub fn failed(niche: &str, requested_count: u32, error: &LlmError) -> Self {
        Self {
            status: GenerationStatus::Error,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            ..Self::new(niche, requested_count, Vec::new())
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GenerationStatus::Success
    }
}
