use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Bot token used when none has been saved from the dashboard
    pub discord_bot_token: Option<String>,
    /// OpenAI key used when none has been saved from the dashboard
    pub openai_api_key: Option<String>,

    /// Start the bot right after launch when a token is available
    pub bot_autostart: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: optional_var("DISCORD_BOT_TOKEN"),
            openai_api_key: optional_var("OPENAI_API_KEY"),
            bot_autostart: parse_bool_var("BOT_AUTOSTART")?,
        })
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool_var(name: &str) -> Result<bool, ConfigError> {
    match optional_var(name) {
        None => Ok(false),
        Some(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar(name.to_string(), value)),
        },
    }
}
