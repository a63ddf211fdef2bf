// Content Generator: blog posts and content calendars.
// All LLM calls go through llm_client; parsing is pure and lives beside the prompts it expects.

pub mod blog_parser;
pub mod calendar_parser;
pub mod generator;
pub mod prompts;

pub use generator::{BlogPostRequest, ContentGenerator};
