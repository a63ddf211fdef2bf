use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use content_ai::config::Config;
use content_ai::feedback::FeedbackAnalyzer;
use content_ai::generation::{BlogPostRequest, ContentGenerator};
use content_ai::output::{save_examples, ExampleOutputs};

const SAMPLE_FEEDBACK: &[&str] = &[
    "The app is amazing! So easy to use and very intuitive.",
    "I'm having trouble with the login. It keeps crashing on my device.",
    "The new update is a bit confusing. I can't find the settings menu anymore.",
    "Billing is incorrect. I was charged twice for my subscription.",
    "Love the new features, especially the dark mode. Keep up the great work!",
    "Customer support was very helpful and resolved my issue quickly.",
];

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting content_ai v{} (model: {})", env!("CARGO_PKG_VERSION"), config.model);
    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY is not set; every call will return an error result");
    }

    let generator = ContentGenerator::new(&config)?;
    let analyzer = FeedbackAnalyzer::new(&config)?;

    info!("Generating blog post about 'Passive Income Strategies'...");
    let blog_post = generator
        .generate_blog_post(
            &BlogPostRequest::new("Passive Income Strategies for Beginners")
                .audience("aspiring entrepreneurs")
                .word_count(600),
        )
        .await;

    match &blog_post.error {
        None => info!(
            "Generated: {} ({} words, tags: {})",
            blog_post.title,
            blog_post.word_count,
            blog_post.tags.join(", ")
        ),
        Some(e) => error!("Blog post failed: {e}"),
    }

    info!("Generating content calendar for 'AI and Technology' niche...");
    let calendar = generator
        .generate_content_calendar("AI and Technology", 10)
        .await;

    match &calendar.error {
        None => {
            info!("Generated {} content ideas", calendar.total_ideas);
            for (i, idea) in calendar.ideas.iter().take(3).enumerate() {
                info!("  {}. {}", i + 1, idea.title);
            }
        }
        Some(e) => error!("Content calendar failed: {e}"),
    }

    info!("Sentiment analysis over {} feedback entries", SAMPLE_FEEDBACK.len());
    for feedback in SAMPLE_FEEDBACK {
        let sentiment = analyzer.analyze_sentiment(feedback).await;
        info!("'{feedback}' -> Sentiment: {sentiment}");
    }

    let themes = analyzer.identify_key_themes(SAMPLE_FEEDBACK).await;
    info!("Key themes:\n{themes}");

    save_examples(
        &config.output_path,
        &ExampleOutputs {
            blog_post_example: blog_post,
            content_calendar_example: calendar,
        },
    )
    .await?;

    Ok(())
}
