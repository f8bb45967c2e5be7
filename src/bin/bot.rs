use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::{ApplicationId, GatewayIntents, Http};
use serenity::Client;
use tracing::{error, info, warn};
use wikibot::ai::LlmClient;
use wikibot::core::config::AppConfig;
use wikibot::discord::{Handler, register_commands};
use wikibot::features::WikiSummarizer;
use wikibot::wiki::WikipediaClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal in deployed environments.
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    wikibot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    let application_id = ApplicationId::new(config.application_id);

    let http = Http::new(&config.discord_token);
    http.set_application_id(application_id);
    if let Err(e) = register_commands(&http, config.guild_id).await {
        warn!("Continuing without fresh command registration: {}", e);
    }

    let summarizer = Arc::new(WikiSummarizer::new(
        Arc::new(WikipediaClient::new(config.wikipedia_api_base.clone())),
        Arc::new(LlmClient::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.openai_model.clone(),
            config.openai_api_base.clone(),
        )),
    ));

    let mut client = Client::builder(&config.discord_token, GatewayIntents::GUILDS)
        .application_id(application_id)
        .event_handler(Handler::new(summarizer))
        .await
        .context("Error creating client")?;

    info!("Connecting to the Discord gateway");
    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    Ok(())
}
