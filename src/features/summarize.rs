#![allow(clippy::missing_errors_doc)]
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::CANONICAL_FAILURE_MESSAGE;
use crate::core::models::WikiTask;
use crate::discord::response_builder::format_summary_reply;
use crate::errors::BotError;

/// Source of the text to condense for a query.
#[async_trait]
pub trait ExtractSource: Send + Sync {
    async fn fetch_extract(&self, query: &str) -> Result<String, BotError>;
}

/// Turns an extract into a shorter summary.
#[async_trait]
pub trait Condenser: Send + Sync {
    async fn condense(&self, text: &str) -> Result<String, BotError>;
}

/// The `/wiki` flow: extract, condense, format.
pub struct WikiSummarizer {
    source: Arc<dyn ExtractSource>,
    condenser: Arc<dyn Condenser>,
}

impl WikiSummarizer {
    #[must_use]
    pub fn new(source: Arc<dyn ExtractSource>, condenser: Arc<dyn Condenser>) -> Self {
        Self { source, condenser }
    }

    /// Fetch and condense, returning the raw condensed text.
    pub async fn summarize(&self, query: &str) -> Result<String, BotError> {
        let extract = self.source.fetch_extract(query).await?;
        info!(
            "Fetched extract for {:?} ({} chars)",
            query,
            extract.chars().count()
        );

        self.condenser.condense(&extract).await
    }

    /// Reply text for a task. Never fails: every error collapses into the
    /// canonical failure message after being logged.
    pub async fn reply_for(&self, task: &WikiTask) -> String {
        let Some(query) = task.query.as_deref() else {
            warn!(
                "Wiki command without a query (correlation_id={})",
                task.correlation_id
            );
            return CANONICAL_FAILURE_MESSAGE.to_string();
        };

        match self.summarize(query).await {
            Ok(summary) => {
                info!(
                    "Summary ready for {:?} (correlation_id={})",
                    query, task.correlation_id
                );
                format_summary_reply(&summary)
            }
            Err(e) => {
                error!(
                    "Error fetching Wikipedia data or summarizing (correlation_id={}): {}",
                    task.correlation_id, e
                );
                CANONICAL_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
