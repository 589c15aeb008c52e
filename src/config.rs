use std::{fmt::Display, str::FromStr};

use dioxus_logger::tracing::Level;

use crate::{
    error::{config::ConfigError, AppError},
    model::markdown::MarkdownSettings,
};

const DEFAULT_PREFIX: &str = "/";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub discord_bot_token: String,

    pub shard_id: u32,
    pub shard_count: u32,

    pub command_prefix: String,
    pub owner_id: Option<u64>,
    pub markdown: MarkdownSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Reads `LOG_LEVEL` from the environment.
    ///
    /// Kept apart from `from_env` so the logger is up before the rest of the
    /// configuration is validated and its errors can be logged.
    pub fn log_level_from_env() -> Level {
        Self::log_level(|name| std::env::var(name).ok())
    }

    /// `LOG_LEVEL` as `trace`, `debug`, `info`, `warn` or `error`, case-insensitive.
    /// Unset or unrecognized values fall back to `info`.
    pub fn log_level<F>(lookup: F) -> Level
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_LEVEL")
            .and_then(|value| Level::from_str(value.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError)` - A required variable is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let markdown = match lookup("MARKDOWN_SETTINGS") {
            Some(json) => MarkdownSettings::from_json_overrides(&json)?,
            None => MarkdownSettings::default(),
        };

        Ok(Self {
            discord_bot_token: lookup("DISCORD_BOT_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            shard_id: parse_var(&lookup, "SHARD_ID")?.unwrap_or(0),
            shard_count: parse_var(&lookup, "SHARD_COUNT")?.unwrap_or(1),
            command_prefix: lookup("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            owner_id: parse_var(&lookup, "BOT_OWNER_ID")?,
            markdown,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}
