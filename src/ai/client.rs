//! LLM (`OpenAI`) API client module
//!
//! Condenses Wikipedia extracts through the chat completions endpoint.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::prompt_builder::build_prompt;
use crate::errors::BotError;
use crate::features::summarize::Condenser;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice's message.
    ///
    /// # Errors
    ///
    /// Returns `BotError::OpenAIError` when there are no choices or the first
    /// one carries no text.
    pub fn first_message_text(self) -> Result<String, BotError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| BotError::OpenAIError("No text in response".to_string()))
    }
}

/// Converts prompt messages into the chat completions wire shape.
#[must_use]
pub fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            match &msg.content {
                Content::Text(text) => Some(json!({
                    "role": role_str,
                    "content": text
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// LLM API client for condensing extracts
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key,
            org_id,
            model_name,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API answers with a
    /// non-success status, or the response holds no message text.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{:?}", prompt);

        let messages = build_chat_messages(&prompt);
        let estimated_input_tokens = messages
            .iter()
            .filter_map(|m| m["content"].as_str())
            .map(estimate_tokens)
            .sum::<usize>();

        info!(
            "Requesting completion from {} with {} messages, ~{} input tokens",
            self.model_name,
            messages.len(),
            estimated_input_tokens
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": messages,
        });

        let mut request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::OpenAIError(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            BotError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        completion.first_message_text()
    }
}

#[async_trait]
impl Condenser for LlmClient {
    async fn condense(&self, text: &str) -> Result<String, BotError> {
        self.generate_summary(build_prompt(text)).await
    }
}
