//! Guild configuration data repository.
//!
//! Each guild owns a single configuration row holding the serialized settings document.
//! Rows are created lazily with default settings the first time a guild is accessed.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder,
};

use crate::{
    model::guild::GuildSettings,
    server::{error::AppError, model::guild_config::GuildConfig},
};

/// Repository providing database operations for guild configuration documents.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    /// Creates a new GuildConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration of a guild without creating it.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Configuration exists
    /// - `Ok(None)` - Guild has never been configured
    /// - `Err(AppError)` - Database error or corrupt stored document
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(GuildConfig::from_entity).transpose()
    }

    /// Returns the configuration of a guild, inserting the default document when missing.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Existing or freshly created configuration
    /// - `Err(AppError)` - Database error or corrupt stored document
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        if let Some(config) = self.find(guild_id).await? {
            return Ok(config);
        }

        let now = Utc::now();
        let entity = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            data: ActiveValue::Set(serde_json::to_string(&GuildSettings::default())?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_server_sync: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        GuildConfig::from_entity(entity)
    }

    /// Replaces the settings document of a guild, creating the row if needed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `settings` - Complete settings document to store
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored configuration with a refreshed `updated_at`
    /// - `Err(AppError)` - Database or serialization error
    pub async fn save(
        &self,
        guild_id: u64,
        settings: &GuildSettings,
    ) -> Result<GuildConfig, AppError> {
        let data = serde_json::to_string(settings)?;
        let now = Utc::now();

        let existing = entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.data = ActiveValue::Set(data);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::guild_config::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    data: ActiveValue::Set(data),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    last_server_sync: ActiveValue::Set(None),
                }
                .insert(self.db)
                .await?
            }
        };

        GuildConfig::from_entity(entity)
    }

    /// Retrieves all configured guilds ordered by guild id.
    pub async fn get_all(&self) -> Result<Vec<GuildConfig>, AppError> {
        entity::prelude::GuildConfig::find()
            .order_by_asc(entity::guild_config::Column::GuildId)
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildConfig::from_entity)
            .collect()
    }

    /// Returns when the Discord server data of a guild was last synchronized.
    pub async fn last_server_sync(
        &self,
        guild_id: u64,
    ) -> Result<Option<DateTime<Utc>>, AppError> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.and_then(|config| config.last_server_sync))
    }

    /// Records a completed server data synchronization.
    ///
    /// Creates the configuration row with default settings when the guild has none yet.
    pub async fn set_last_server_sync(
        &self,
        guild_id: u64,
        synced_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.get_or_create(guild_id).await?;

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Unchanged(guild_id.to_string()),
            last_server_sync: ActiveValue::Set(Some(synced_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
