//! Thin chat-completion clients for marketing content and feedback analysis.
//!
//! - [`generation::ContentGenerator`] writes blog posts and content calendars
//!   and parses the model's free-text replies into records.
//! - [`feedback::FeedbackAnalyzer`] labels sentiment and summarises themes.
//!
//! Both sit on the [`llm_client::ChatCompletion`] trait.

pub mod config;
pub mod errors;
pub mod feedback;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod output;
