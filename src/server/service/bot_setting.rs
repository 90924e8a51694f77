//! Persisted bot credentials.
//!
//! Credentials entered on the dashboard are stored in the database and take precedence
//! over the environment, which only seeds them on first start.

use sea_orm::DatabaseConnection;

use crate::server::{data::bot_setting::BotSettingRepository, error::AppError};

const DISCORD_TOKEN_KEY: &str = "discord_token";
const OPENAI_API_KEY_KEY: &str = "openai_api_key";

pub struct BotSettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotSettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stored Discord bot token, ignoring empty values.
    pub async fn discord_token(&self) -> Result<Option<String>, AppError> {
        self.get_non_empty(DISCORD_TOKEN_KEY).await
    }

    /// Returns the stored OpenAI API key, ignoring empty values.
    pub async fn openai_api_key(&self) -> Result<Option<String>, AppError> {
        self.get_non_empty(OPENAI_API_KEY_KEY).await
    }

    pub async fn set_discord_token(&self, token: &str) -> Result<(), AppError> {
        Ok(BotSettingRepository::new(self.db)
            .set(DISCORD_TOKEN_KEY, token.trim())
            .await?)
    }

    pub async fn set_openai_api_key(&self, key: &str) -> Result<(), AppError> {
        Ok(BotSettingRepository::new(self.db)
            .set(OPENAI_API_KEY_KEY, key.trim())
            .await?)
    }

    async fn get_non_empty(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = BotSettingRepository::new(self.db).get(key).await?;
        Ok(value.filter(|value| !value.trim().is_empty()))
    }
}
