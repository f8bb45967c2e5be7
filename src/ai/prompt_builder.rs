use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Instruction sent ahead of every extract.
pub const SYSTEM_PROMPT: &str = "Summarize the following text.";

/// System instruction followed by the extract, verbatim, as the user turn.
#[must_use]
pub fn build_prompt(extract: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(extract.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
