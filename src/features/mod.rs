pub mod summarize;

pub use summarize::{Condenser, ExtractSource, WikiSummarizer};

/// Canonical failure message shown to users when a lookup or summary fails.
pub const CANONICAL_FAILURE_MESSAGE: &str =
    "Could not find anything on Wikipedia or summarize it.";
