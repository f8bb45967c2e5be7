//! Reply formatting for Discord interactions.

/// Discord rejects message content longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Label placed ahead of every condensed summary.
pub const SUMMARY_LABEL: &str = "**Summary:**";

const ELLIPSIS: char = '…';

/// Prefix a condensed summary with the summary label.
///
/// # Examples
///
/// ```
/// use wikibot::discord::response_builder::format_summary_reply;
///
/// let reply = format_summary_reply("Rust is a language.");
/// assert_eq!(reply, "**Summary:**\nRust is a language.");
/// ```
#[must_use]
pub fn format_summary_reply(summary: &str) -> String {
    truncate_for_discord(&format!("{SUMMARY_LABEL}\n{summary}"))
}

/// Cut `text` to fit a single Discord message, ending with an ellipsis when
/// anything was dropped. Counts chars, never splits one.
#[must_use]
pub fn truncate_for_discord(text: &str) -> String {
    if text.chars().count() <= DISCORD_MESSAGE_LIMIT {
        return text.to_string();
    }

    let mut out: String = text.chars().take(DISCORD_MESSAGE_LIMIT - 1).collect();
    out.push(ELLIPSIS);
    out
}
