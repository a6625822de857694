use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/databases/template.db?mode=rwc";

pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    /// The single process-wide owner allowed to run owner-only commands.
    pub owner_id: u64,
    /// When set, commands are registered to this guild only for fast sync.
    pub test_guild_id: Option<u64>,
    /// Destination channel for `/suggest` submissions.
    pub suggestion_channel_id: Option<u64>,

    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let optional_id = |name: &str| -> Result<Option<u64>, ConfigError> {
            match lookup(name).filter(|value| !value.trim().is_empty()) {
                Some(value) => parse_id(name, &value).map(Some),
                None => Ok(None),
            }
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse::<tracing::Level>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => tracing::Level::INFO,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            discord_token: required("DISCORD_TOKEN")?,
            owner_id: parse_id("OWNER_ID", &required("OWNER_ID")?)?,
            test_guild_id: optional_id("TEST_GUILD_ID")?,
            suggestion_channel_id: optional_id("SUGGESTION_CHANNEL_ID")?,
            log_level,
        })
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
