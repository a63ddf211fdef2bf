//! Content Calendar Parser: splits a reply into `---` delimited segments and
//! extracts one `ContentIdea` per segment that carries a title.

use chrono::Utc;

use crate::models::ContentIdea;

const SEGMENT_DELIMITER: &str = "---";
const IDEA_MARKER: &str = "IDEA";

const TITLE_PREFIX: &str = "Title:";
const DESCRIPTION_PREFIX: &str = "Description:";
const AUDIENCE_PREFIX: &str = "Audience:";
const LEVEL_PREFIX: &str = "Level:";

/// Parses every qualifying segment of `reply`. The result may hold fewer or
/// more ideas than were requested; no padding or truncation happens here.
pub fn parse_calendar(reply: &str) -> Vec<ContentIdea> {
    reply
        .split(SEGMENT_DELIMITER)
        .filter(|segment| is_candidate(segment))
        .filter_map(parse_idea)
        .collect()
}

fn is_candidate(segment: &str) -> bool {
    segment.contains(IDEA_MARKER) && segment.contains(TITLE_PREFIX)
}

/// Returns `None` when no line starts with `Title:`; the rest of the segment is discarded with it.
fn parse_idea(segment: &str) -> Option<ContentIdea> {
    let mut title = None;
    let mut description = String::new();
    let mut audience = String::new();
    let mut level = String::new();

    for line in segment.trim().lines() {
        if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
            title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(DESCRIPTION_PREFIX) {
            description = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(AUDIENCE_PREFIX) {
            audience = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(LEVEL_PREFIX) {
            level = rest.trim().to_string();
        }
    }

    Some(ContentIdea {
        title: title?,
        description,
        audience,
        level,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_IDEAS: &str = "IDEA 1:
Title: Getting Started with AI Tools
Description: Learn how to leverage AI tools for productivity. This guide covers the basics.
Audience: Business professionals
Level: Beginner
---
IDEA 2:
Title: Advanced Machine Learning Techniques
Description: Deep dive into ML algorithms. Explore neural networks and optimization.
Audience: Data scientists
Level: Advanced
---";

    #[test]
    fn test_parses_all_well_formed_ideas() {
        let ideas = parse_calendar(TWO_IDEAS);
        assert_eq!(ideas.len(), 2);

        let first = &ideas[0];
        assert_eq!(first.title, "Getting Started with AI Tools");
        assert!(first.description.contains("AI tools for productivity"));
        assert_eq!(first.audience, "Business professionals");
        assert_eq!(first.level, "Beginner");

        assert_eq!(ideas[1].title, "Advanced Machine Learning Techniques");
        assert_eq!(ideas[1].level, "Advanced");
    }

    #[test]
    fn test_segment_without_title_line_is_dropped() {
        let reply = "IDEA 1:
Title: Kept
Description: Has a title.
---
IDEA 2:
Description: No title here.
Audience: Nobody
---";
        let ideas = parse_calendar(reply);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Kept");
    }

    #[test]
    fn test_segment_without_idea_marker_is_skipped() {
        let reply = "Here are your ideas!\nTitle: Not an idea\n---\nIDEA 1:\nTitle: Real idea";
        let ideas = parse_calendar(reply);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Real idea");
    }

    #[test]
    fn test_title_prefix_inside_a_line_does_not_count() {
        // Passes the substring check but no line starts with `Title:`.
        let reply = "IDEA 1:\nSubTitle: nested\nDescription: orphan";
        assert!(parse_calendar(reply).is_empty());
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let ideas = parse_calendar("IDEA 7:\nTitle: Bare idea");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].description, "");
        assert_eq!(ideas[0].audience, "");
        assert_eq!(ideas[0].level, "");
    }

    #[test]
    fn test_bare_title_line_keeps_idea_with_empty_title() {
        let ideas = parse_calendar("IDEA 3:\nTitle:\nLevel: Advanced");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "");
        assert_eq!(ideas[0].level, "Advanced");
    }

    #[test]
    fn test_empty_and_unstructured_replies_yield_nothing() {
        assert!(parse_calendar("").is_empty());
        assert!(parse_calendar("---\n---").is_empty());
        assert!(parse_calendar("I cannot help with that.").is_empty());
    }

    #[test]
    fn test_more_ideas_than_requested_are_kept() {
        let reply = (1..=4)
            .map(|n| format!("IDEA {n}:\nTitle: Idea {n}\n"))
            .collect::<Vec<_>>()
            .join("---\n");
        let ideas = parse_calendar(&reply);
        assert_eq!(ideas.len(), 4);
        assert_eq!(ideas[3].title, "Idea 4");
    }
}
