//! JSON persistence for the demo runner's example outputs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{BlogPost, ContentCalendar};

/// The file layout written by the demo: one blog post and one calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleOutputs {
    pub blog_post_example: BlogPost,
    pub content_calendar_example: ContentCalendar,
}

/// Writes `outputs` as pretty-printed JSON, replacing any existing file.
pub async fn save_examples(path: impl AsRef<Path>, outputs: &ExampleOutputs) -> Result<(), AppError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(outputs)?;
    tokio::fs::write(path, json).await?;
    info!("Examples saved to {}", path.display());
    Ok(())
}
