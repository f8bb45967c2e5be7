//! All Discord-specific functionality

pub mod commands;
pub mod handler;
pub mod response_builder;

// Re-export main types for convenience
pub use commands::{create_commands, register_commands};
pub use handler::Handler;
