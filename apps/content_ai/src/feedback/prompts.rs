// Prompt constants for the Feedback Analyzer.

pub const SENTIMENT_SYSTEM: &str = "You are a sentiment analysis expert.";

/// Replace `{text}` before sending.
pub const SENTIMENT_PROMPT_TEMPLATE: &str = "Analyze the sentiment of the following text and \
    return one of the following: Positive, Negative, or Neutral.\n\nText: \"{text}\"";

/// The label is a single word; a tiny budget keeps the model from explaining itself.
pub const SENTIMENT_MAX_TOKENS: u32 = 10;
pub const SENTIMENT_TEMPERATURE: f32 = 0.0;

pub const THEMES_SYSTEM: &str = "You are an expert in text analysis and theme identification.";

/// Replace `{feedback}` with the bulleted list before sending.
pub const THEMES_PROMPT_TEMPLATE: &str = "Identify the key themes from the following list of \
    user feedback. Group similar feedback together and provide a summary of the main topics.\
    \n\nFeedback:\n{feedback}";

pub const THEMES_MAX_TOKENS: u32 = 500;
pub const THEMES_TEMPERATURE: f32 = 0.5;

pub fn build_sentiment_prompt(text: &str) -> String {
    SENTIMENT_PROMPT_TEMPLATE.replace("{text}", text)
}

pub fn build_themes_prompt<S: AsRef<str>>(feedback: &[S]) -> String {
    THEMES_PROMPT_TEMPLATE.replace("{feedback}", &bullet_list(feedback))
}

/// One `- ` bullet per entry, newline separated.
fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n- ");
    format!("- {joined}")
}
