// All LLM prompt constants for the Content Generator.
// The reply formats described here are exactly what the parsers in
// blog_parser.rs and calendar_parser.rs look for.

/// System prompt for blog post generation.
pub const BLOG_POST_SYSTEM: &str = "You are an expert content writer specializing in \
    engaging, SEO-friendly blog posts.";

/// Blog post prompt template. Replace: {topic}, {target_audience}, {word_count}
pub const BLOG_POST_PROMPT_TEMPLATE: &str = r#"Write a comprehensive blog post about '{topic}' for {target_audience}.

Requirements:
- Approximately {word_count} words
- Include an engaging title
- Structure with clear headings and subheadings
- Include practical tips or actionable advice
- End with a conclusion that encourages engagement
- Use a conversational but professional tone

Format the response as:
TITLE: [Blog post title]

CONTENT:
[Full blog post content with proper formatting]

TAGS: [5 relevant tags separated by commas]"#;

/// System prompt for content calendar generation.
pub const CALENDAR_SYSTEM: &str = "You are a content strategist specializing in creating \
    engaging content calendars.";

/// Content calendar prompt template. Replace: {num_posts}, {niche}
pub const CALENDAR_PROMPT_TEMPLATE: &str = r#"Create {num_posts} blog post ideas for the {niche} niche.

For each idea, provide:
1. A compelling title
2. A brief description (2-3 sentences)
3. Target audience
4. Estimated difficulty level (Beginner/Intermediate/Advanced)

Format each idea as:
IDEA [number]:
Title: [title]
Description: [description]
Audience: [target audience]
Level: [difficulty level]
---"#;

/// Randomness for blog posts: moderate creativity.
pub const BLOG_POST_TEMPERATURE: f32 = 0.7;

/// Randomness for calendar ideas: more varied than blog posts.
pub const CALENDAR_TEMPERATURE: f32 = 0.8;

pub const CALENDAR_MAX_TOKENS: u32 = 2000;

pub fn build_blog_post_prompt(topic: &str, target_audience: &str, word_count: u32) -> String {
    let word_count = word_count.to_string();
    fill_template(
        BLOG_POST_PROMPT_TEMPLATE,
        &[
            ("topic", topic),
            ("target_audience", target_audience),
            ("word_count", word_count.as_str()),
        ],
    )
}

pub fn build_calendar_prompt(niche: &str, num_posts: u32) -> String {
    let num_posts = num_posts.to_string();
    fill_template(
        CALENDAR_PROMPT_TEMPLATE,
        &[("num_posts", num_posts.as_str()), ("niche", niche)],
    )
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
/// Substituted values are never rescanned, so caller text containing
/// placeholder-like braces is embedded verbatim. Unknown `{...}` is kept as is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = values.iter().find_map(|(name, value)| {
            after
                .strip_prefix(*name)?
                .strip_prefix('}')
                .map(|remaining| (*value, remaining))
        });
        match hit {
            Some((value, remaining)) => {
                out.push_str(value);
                rest = remaining;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Output budget for a blog post: about 1.5 tokens per requested word, rounded.
pub fn blog_post_max_tokens(word_count: u32) -> u32 {
    (f64::from(word_count) * 1.5).round() as u32
}
