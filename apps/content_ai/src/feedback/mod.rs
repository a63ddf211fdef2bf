// Feedback Analyzer: sentiment classification and theme summaries.

pub mod analyzer;
pub mod prompts;
pub mod sentiment;

pub use analyzer::FeedbackAnalyzer;
pub use sentiment::Sentiment;
