//! Content Generator: prompt, chat completion, parse. Used for blog posts and
//! content calendars.
//!
//! Failures from the LLM client are never propagated out of the public
//! operations. They come back as records with `status = Error`, the client's
//! error message, and its `FailureKind`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::config::Config;
use crate::generation::blog_parser::parse_blog_post;
use crate::generation::calendar_parser::parse_calendar;
use crate::generation::prompts::{
    blog_post_max_tokens, build_blog_post_prompt, build_calendar_prompt, BLOG_POST_SYSTEM,
    BLOG_POST_TEMPERATURE, CALENDAR_MAX_TOKENS, CALENDAR_SYSTEM, CALENDAR_TEMPERATURE,
};
use crate::llm_client::{ChatCompletion, ChatRequest, LlmClient, LlmError};
use crate::models::{BlogPost, ContentCalendar, GenerationStatus};

pub const DEFAULT_AUDIENCE: &str = "general";
pub const DEFAULT_WORD_COUNT: u32 = 800;
pub const DEFAULT_CALENDAR_POSTS: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Parameters for one blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostRequest {
    pub topic: String,
    pub target_audience: String,
    /// Approximate length asked of the model. Also sizes the output budget.
    pub word_count: u32,
}

impl BlogPostRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            target_audience: DEFAULT_AUDIENCE.to_string(),
            word_count: DEFAULT_WORD_COUNT,
        }
    }

    pub fn audience(mut self, target_audience: impl Into<String>) -> Self {
        self.target_audience = target_audience.into();
        self
    }

    pub fn word_count(mut self, word_count: u32) -> Self {
        self.word_count = word_count;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ContentGenerator {
    llm: Arc<dyn ChatCompletion>,
    model: String,
}

impl ContentGenerator {
    /// Builds a generator backed by the HTTP client. Succeeds without an API
    /// key; calls then fail with an authentication error.
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

    pub async fn generate_blog_post(&self, request: &BlogPostRequest) -> BlogPost {
        match self.try_generate_blog_post(request).await {
            Ok(post) => post,
            Err(e) => {
                error!("Blog post generation failed for '{}': {e}", request.topic);
                BlogPost::failed(&request.topic, &request.target_audience, &e)
            }
        }
    }

    /// Same as `generate_blog_post`, but hands the client failure back to the caller.
    pub async fn try_generate_blog_post(
        &self,
        request: &BlogPostRequest,
    ) -> Result<BlogPost, LlmError> {
        let chat = ChatRequest::new(
            &self.model,
            BLOG_POST_SYSTEM,
            build_blog_post_prompt(&request.topic, &request.target_audience, request.word_count),
            blog_post_max_tokens(request.word_count),
            BLOG_POST_TEMPERATURE,
        );

        let reply = self.llm.complete(&chat).await?;
        let parsed = parse_blog_post(&reply);

        info!(
            "Generated blog post '{}' ({} words, {} tags)",
            parsed.title,
            parsed.word_count,
            parsed.tags.len()
        );

        Ok(BlogPost {
            title: parsed.title,
            content: parsed.content,
            tags: parsed.tags,
            topic: request.topic.clone(),
            target_audience: request.target_audience.clone(),
            word_count: parsed.word_count,
            generated_at: Utc::now(),
            status: GenerationStatus::Success,
            error: None,
            error_kind: None,
        })
    }

    pub async fn generate_content_calendar(&self, niche: &str, num_posts: u32) -> ContentCalendar {
        match self.try_generate_content_calendar(niche, num_posts).await {
            Ok(calendar) => calendar,
            Err(e) => {
                error!("Content calendar generation failed for '{niche}': {e}");
                ContentCalendar::failed(niche, num_posts, &e)
            }
        }
    }

    pub async fn try_generate_content_calendar(
        &self,
        niche: &str,
        num_posts: u32,
    ) -> Result<ContentCalendar, LlmError> {
        let chat = ChatRequest::new(
            &self.model,
            CALENDAR_SYSTEM,
            build_calendar_prompt(niche, num_posts),
            CALENDAR_MAX_TOKENS,
            CALENDAR_TEMPERATURE,
        );

        let reply = self.llm.complete(&chat).await?;
        let ideas = parse_calendar(&reply);

        info!(
            "Generated {} content ideas for '{}' ({} requested)",
            ideas.len(),
            niche,
            num_posts
        );

        Ok(ContentCalendar::new(niche, num_posts, ideas))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
