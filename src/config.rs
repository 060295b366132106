use crate::error::{config::ConfigError, AppError};

/// Coordinates of the external audio node.
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    /// Shared secret, sent on control calls and expected on event intake.
    pub password: String,
}

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    pub command_prefix: String,
    pub web_port: u16,

    pub node: NodeConfig,

    /// Channel where `!recruitment` is accepted. Unset disables the flow.
    pub recruitment_channel_id: Option<u64>,
    /// Channel notified about submitted applications.
    pub recruitment_notify_channel_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string()),
            web_port: optional_parsed("WEB_PORT")?.unwrap_or(8080),
            node: NodeConfig {
                host: std::env::var("NODE_HOST")
                    .map_err(|_| ConfigError::MissingEnvVar("NODE_HOST".to_string()))?,
                port: optional_parsed("NODE_PORT")?.unwrap_or(2333),
                password: std::env::var("NODE_PASSWORD")
                    .map_err(|_| ConfigError::MissingEnvVar("NODE_PASSWORD".to_string()))?,
            },
            recruitment_channel_id: optional_parsed("RECRUITMENT_CHANNEL_ID")?,
            recruitment_notify_channel_id: optional_parsed("RECRUITMENT_NOTIFY_CHANNEL_ID")?,
        })
    }
}

/// Reads an optional environment variable and parses it, distinguishing
/// "unset" (Ok(None)) from "set but garbage" (Err).
fn optional_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string())),
        Err(_) => Ok(None),
    }
}
