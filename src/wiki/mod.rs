//! Encyclopedia lookups

pub mod client;

pub use client::{PageSummary, WikipediaClient, encode_title};
