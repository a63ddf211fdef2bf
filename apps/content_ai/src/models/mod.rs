pub mod blog;
pub mod calendar;

use serde::{Deserialize, Serialize};

pub use blog::BlogPost;
pub use calendar::{ContentCalendar, ContentIdea};

/// Outcome of a single generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Success,
    Error,
}
