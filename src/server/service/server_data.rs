//! Cached Discord server data service.
//!
//! Roles, channels and emojis are mirrored into the database so dashboard selectors
//! keep working while the bot is offline.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Http};

use crate::server::{
    data::{guild_config::GuildConfigRepository, server_data::ServerDataRepository},
    error::AppError,
    model::server_data::{
        ServerData, SyncChannelParam, SyncEmojiParam, SyncRoleParam, SyncServerDataParam,
    },
};

pub struct ServerDataService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerDataService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the cached data of a guild together with its last sync time.
    pub async fn get(&self, guild_id: u64) -> Result<ServerData, AppError> {
        let mut data = ServerDataRepository::new(self.db).get(guild_id).await?;
        data.last_sync = GuildConfigRepository::new(self.db)
            .last_server_sync(guild_id)
            .await?;

        Ok(data)
    }

    /// Replaces the cached data of a guild and records the sync time.
    pub async fn store(&self, guild_id: u64, param: SyncServerDataParam) -> Result<(), AppError> {
        ServerDataRepository::new(self.db)
            .replace(guild_id, param)
            .await?;
        GuildConfigRepository::new(self.db)
            .set_last_server_sync(guild_id, Utc::now())
            .await
    }

    /// Fetches roles, channels & emojis of a guild over the Discord API and caches them.
    ///
    /// # Arguments
    /// - `http` - HTTP client of the running bot
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(())` - Cache replaced
    /// - `Err(AppError::DiscordErr)` - Discord API request failed
    /// - `Err(AppError::DbErr)` - Database error while storing
    pub async fn sync(&self, http: &Http, guild_id: u64) -> Result<(), AppError> {
        let guild = GuildId::new(guild_id);

        let roles = guild.roles(http).await?;
        let channels = guild.channels(http).await?;
        let emojis = guild.emojis(http).await?;

        let param = SyncServerDataParam {
            roles: roles.values().map(SyncRoleParam::from_role).collect(),
            channels: channels
                .values()
                .filter_map(SyncChannelParam::from_channel)
                .collect(),
            emojis: emojis.iter().map(SyncEmojiParam::from_emoji).collect(),
        };

        tracing::debug!(
            "Syncing guild {}: {} roles, {} channels, {} emojis",
            guild_id,
            param.roles.len(),
            param.channels.len(),
            param.emojis.len()
        );

        self.store(guild_id, param).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Tests that storing data records the sync time.
    ///
    /// Expected: stored rows returned with last_sync set
    #[tokio::test]
    async fn store_sets_last_sync() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .with_server_data_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ServerDataService::new(db);
        assert!(service.get(1).await?.last_sync.is_none());

        service
            .store(
                1,
                SyncServerDataParam {
                    roles: vec![SyncRoleParam {
                        role_id: "2".to_string(),
                        name: "Member".to_string(),
                        color: "#FFFFFF".to_string(),
                        position: 1,
                    }],
                    channels: vec![SyncChannelParam {
                        channel_id: "3".to_string(),
                        name: "general".to_string(),
                        kind: "text".to_string(),
                        position: 0,
                    }],
                    emojis: Vec::new(),
                },
            )
            .await?;

        let data = service.get(1).await?;
        assert!(data.last_sync.is_some());

        let dto = data.into_dto();
        assert_eq!(dto.roles.len(), 1);
        assert_eq!(dto.channels[0].name, "general");

        Ok(())
    }
}
