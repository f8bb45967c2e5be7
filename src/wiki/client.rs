//! Wikipedia REST client
//!
//! Fetches the plain-text `extract` of a page summary.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::BotError;
use crate::features::summarize::ExtractSource;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (Discord /wiki command)"
);

/// Subset of the `page/summary` response we read.
#[derive(Debug, Deserialize)]
pub struct PageSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
}

impl PageSummary {
    /// The extract, if it carries any text.
    #[must_use]
    pub fn into_extract(self) -> Option<String> {
        self.extract.filter(|e| !e.trim().is_empty())
    }
}

/// Encodes a free-text query as a single path segment.
#[must_use]
pub fn encode_title(query: &str) -> String {
    utf8_percent_encode(query, COMPONENT).to_string()
}

pub struct WikipediaClient {
    http: Client,
    base_url: String,
}

impl WikipediaClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to a client without User-Agent: {}", e);
                Client::new()
            });

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn summary_url(&self, query: &str) -> String {
        format!("{}/page/summary/{}", self.base_url, encode_title(query))
    }

    /// Fetches the summary extract for `query`.
    ///
    /// # Errors
    ///
    /// `BotError::NotFound` when the page does not exist or has no extract,
    /// `BotError::WikipediaError` for other non-success responses and
    /// `BotError::HttpError` when the request itself fails.
    pub async fn fetch_extract(&self, query: &str) -> Result<String, BotError> {
        let url = self.summary_url(query);
        debug!("Fetching Wikipedia summary from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(BotError::NotFound(query.to_string()));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::WikipediaError(format!("{status}: {body}")));
        }

        let page: PageSummary = response.json().await.map_err(|e| {
            BotError::WikipediaError(format!("Failed to parse page summary: {e}"))
        })?;

        if let Some(title) = &page.title {
            info!("Resolved query {:?} to page {:?}", query, title);
        }

        page.into_extract()
            .ok_or_else(|| BotError::NotFound(query.to_string()))
    }
}

#[async_trait]
impl ExtractSource for WikipediaClient {
    async fn fetch_extract(&self, query: &str) -> Result<String, BotError> {
        WikipediaClient::fetch_extract(self, query).await
    }
}
