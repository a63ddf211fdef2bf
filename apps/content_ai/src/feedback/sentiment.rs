use serde::{Deserialize, Serialize};

/// The three labels the sentiment prompt asks for.
///
/// `FeedbackAnalyzer::analyze_sentiment` returns the model's text verbatim;
/// this is an opt-in typed view of that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Case-insensitive match, ignoring surrounding whitespace and trailing punctuation.
    /// Anything else, including prose around the label, yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let cleaned = label
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .trim();

        if cleaned.eq_ignore_ascii_case("positive") {
            Some(Sentiment::Positive)
        } else if cleaned.eq_ignore_ascii_case("negative") {
            Some(Sentiment::Negative)
        } else if cleaned.eq_ignore_ascii_case("neutral") {
            Some(Sentiment::Neutral)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
