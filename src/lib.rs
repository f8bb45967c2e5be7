/// wikibot - A Discord bot that answers `/wiki <query>` with a condensed
/// Wikipedia summary.
///
/// # Architecture
///
/// The `/wiki` handler runs two sequential outbound calls:
/// - the Wikipedia REST `page/summary` endpoint for the page extract
/// - the `OpenAI` chat completions endpoint to condense that extract
///
/// and edits its deferred reply with the result. Every failure collapses
/// into one fallback message.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use wikibot::ai::LlmClient;
/// use wikibot::core::config::AppConfig;
/// use wikibot::core::models::WikiTask;
/// use wikibot::features::WikiSummarizer;
/// use wikibot::wiki::WikipediaClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     wikibot::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let summarizer = WikiSummarizer::new(
///         Arc::new(WikipediaClient::new(config.wikipedia_api_base.clone())),
///         Arc::new(LlmClient::new(
///             config.openai_api_key.clone(),
///             config.openai_org_id.clone(),
///             config.openai_model.clone(),
///             config.openai_api_base.clone(),
///         )),
///     );
///
///     let task = WikiTask::new(0, "demo", Some("Python (programming language)"));
///     println!("{}", summarizer.reply_for(&task).await);
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod core;
pub mod discord;
pub mod errors;
pub mod features;
pub mod wiki;

pub use ai::estimate_tokens;
pub use errors::BotError;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// wikibot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
