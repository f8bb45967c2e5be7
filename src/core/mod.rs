//! Configuration and request-scoped models

pub mod config;
pub mod models;
