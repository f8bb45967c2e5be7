use std::env;

use url::Url;

use crate::errors::BotError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_WIKIPEDIA_API_BASE: &str = "https://en.wikipedia.org/api/rest_v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub application_id: u64,
    pub guild_id: u64,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_api_base: String,
    pub wikipedia_api_base: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` naming the first variable that is
    /// missing or malformed.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DISCORD_TOKEN` wins over the legacy `TOKEN` name when both are set.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` naming the first variable that is
    /// missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            present(key).ok_or_else(|| BotError::ConfigError(format!("{key} is not set")))
        };

        let discord_token = present("DISCORD_TOKEN")
            .or_else(|| present("TOKEN"))
            .ok_or_else(|| BotError::ConfigError("DISCORD_TOKEN is not set".to_string()))?;

        Ok(Self {
            discord_token,
            application_id: parse_id("CLIENT_ID", &required("CLIENT_ID")?)?,
            guild_id: parse_id("GUILD_ID", &required("GUILD_ID")?)?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: present("OPENAI_ORG_ID"),
            openai_model: present("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_api_base: parse_base(
                "OPENAI_API_BASE",
                present("OPENAI_API_BASE").as_deref(),
                DEFAULT_OPENAI_API_BASE,
            )?,
            wikipedia_api_base: parse_base(
                "WIKIPEDIA_API_BASE",
                present("WIKIPEDIA_API_BASE").as_deref(),
                DEFAULT_WIKIPEDIA_API_BASE,
            )?,
        })
    }
}

fn parse_id(key: &str, raw: &str) -> Result<u64, BotError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(BotError::ConfigError(format!(
            "{key} must be a non-zero numeric id, got {raw:?}"
        ))),
    }
}

fn parse_base(key: &str, raw: Option<&str>, default: &str) -> Result<String, BotError> {
    let value = raw.unwrap_or(default).trim();
    Url::parse(value).map_err(|e| BotError::ConfigError(format!("{key}: {e}")))?;
    // Paths are appended with a leading slash.
    Ok(value.trim_end_matches('/').to_string())
}
