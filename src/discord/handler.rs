//! Gateway event handler

use std::sync::Arc;

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, EventHandler, Interaction, Ready,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use super::commands::{QUERY_OPTION, WIKI_COMMAND};
use crate::core::models::WikiTask;
use crate::features::WikiSummarizer;

pub struct Handler {
    summarizer: Arc<WikiSummarizer>,
}

impl Handler {
    #[must_use]
    pub fn new(summarizer: Arc<WikiSummarizer>) -> Self {
        Self { summarizer }
    }

    async fn handle_wiki_command(&self, ctx: &Context, command: &CommandInteraction) {
        let query = command
            .data
            .options
            .iter()
            .find(|opt| opt.name == QUERY_OPTION)
            .and_then(|opt| opt.value.as_str());

        let task = WikiTask::new(command.user.id.get(), command.user.name.clone(), query);
        info!(
            "Wiki command from {} ({}) query={:?} correlation_id={}",
            task.user_name, task.user_id, task.query, task.correlation_id
        );

        if let Err(why) = command
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
            )
            .await
        {
            error!(
                "Cannot defer response (ref: {}): {:?}",
                task.short_ref(),
                why
            );
            return;
        }

        let reply = self.summarizer.reply_for(&task).await;

        if let Err(why) = command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
            .await
        {
            error!("Cannot edit response (ref: {}): {:?}", task.short_ref(), why);
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.tag());
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        match command.data.name.as_str() {
            WIKI_COMMAND => self.handle_wiki_command(&ctx, &command).await,
            other => warn!("Unknown command: {}", other),
        }
    }
}
