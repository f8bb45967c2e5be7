//! Slash command schema and registration

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http};
use tracing::{error, info};

use crate::errors::BotError;

pub const WIKI_COMMAND: &str = "wiki";
pub const QUERY_OPTION: &str = "query";

/// All slash commands the bot registers.
#[must_use]
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(WIKI_COMMAND)
            .description("Search Wikipedia for a topic")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    QUERY_OPTION,
                    "The topic you want to search on Wikipedia",
                )
                .required(true),
            ),
    ]
}

/// Replaces the guild's commands with [`create_commands`].
///
/// This is a bulk overwrite, so registering the same schema again is a no-op
/// on Discord's side. `http` must already carry the application id.
///
/// # Errors
///
/// Returns `BotError::DiscordError` if the registration request fails.
pub async fn register_commands(http: &Http, guild_id: u64) -> Result<usize, BotError> {
    info!("Registering slash commands...");

    match GuildId::new(guild_id)
        .set_commands(http, create_commands())
        .await
    {
        Ok(registered) => {
            info!(
                "Slash commands were registered successfully! ({} in guild {})",
                registered.len(),
                guild_id
            );
            Ok(registered.len())
        }
        Err(e) => {
            error!("There was an error registering commands: {}", e);
            Err(e.into())
        }
    }
}
