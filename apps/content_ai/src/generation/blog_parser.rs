//! Blog Post Parser: turns a free-text model reply into title, body and tags.
//!
//! Expected reply shape (see `prompts::BLOG_POST_PROMPT_TEMPLATE`):
//!
//! ```text
//! TITLE: <title>
//!
//! CONTENT:
//! <body lines>
//!
//! TAGS: <comma separated tags>
//! ```
//!
//! Parsing is best-effort and never fails. Missing markers leave the
//! corresponding field empty.

const TITLE_MARKER: &str = "TITLE:";
const CONTENT_MARKER: &str = "CONTENT:";
const TAGS_MARKER: &str = "TAGS:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Content,
    Tags,
}

/// Structured fields recovered from a blog post reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlogPost {
    pub title: String,
    /// Body with surrounding whitespace trimmed.
    pub content: String,
    pub tags: Vec<String>,
    /// Whitespace-delimited tokens in `title + "\n" + body`.
    pub word_count: usize,
}

pub fn parse_blog_post(reply: &str) -> ParsedBlogPost {
    let mut title = String::new();
    let mut body = String::new();
    let mut raw_tags = String::new();
    let mut section: Option<Section> = None;

    for line in reply.lines() {
        if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
            title = rest.trim().to_string();
            section = Some(Section::Title);
        } else if line.starts_with(CONTENT_MARKER) {
            section = Some(Section::Content);
        } else if let Some(rest) = line.strip_prefix(TAGS_MARKER) {
            raw_tags = rest.trim().to_string();
            section = Some(Section::Tags);
        } else if section == Some(Section::Content) && !line.trim().is_empty() {
            body.push_str(line);
            body.push('\n');
        }
    }

    let word_count = count_words(&title, &body);

    ParsedBlogPost {
        title,
        content: body.trim().to_string(),
        tags: split_tags(&raw_tags),
        word_count,
    }
}

/// Title words count toward the total alongside the body.
fn count_words(title: &str, body: &str) -> usize {
    title.split_whitespace().count() + body.split_whitespace().count()
}

/// Comma-separated tags, trimmed, empties dropped, order preserved.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
