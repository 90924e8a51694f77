//! Warning and moderation log repositories.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::moderation::{ModLog, ModerationActionParam, Warning},
};

/// Repository for member warnings.
pub struct WarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new warning.
    pub async fn create(
        &self,
        guild_id: u64,
        param: &ModerationActionParam,
    ) -> Result<Warning, AppError> {
        let entity = entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.clone()),
            moderator_id: ActiveValue::Set(param.moderator_id.clone()),
            reason: ActiveValue::Set(param.reason.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Warning::from_entity(entity)
    }

    /// Lists warnings of a guild, newest first, optionally only those of one user.
    pub async fn list(
        &self,
        guild_id: u64,
        user_id: Option<&str>,
    ) -> Result<Vec<Warning>, AppError> {
        let mut query = entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()));

        if let Some(user_id) = user_id {
            query = query.filter(entity::warning::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::warning::Column::CreatedAt)
            .order_by_desc(entity::warning::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Warning::from_entity)
            .collect()
    }

    /// Deletes all warnings of one user and returns how many were removed.
    pub async fn delete_for_user(&self, guild_id: u64, user_id: &str) -> Result<u64, AppError> {
        let result = entity::prelude::Warning::delete_many()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::warning::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?)
    }
}

/// Repository for the moderation action log.
pub struct ModLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an action (`warn`, `kick`, `ban`, `mute`, ...) to the log.
    pub async fn create(
        &self,
        guild_id: u64,
        action: &str,
        param: &ModerationActionParam,
    ) -> Result<ModLog, AppError> {
        let entity = entity::mod_log::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            action: ActiveValue::Set(action.to_string()),
            user_id: ActiveValue::Set(param.user_id.clone()),
            moderator_id: ActiveValue::Set(param.moderator_id.clone()),
            reason: ActiveValue::Set(param.reason.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ModLog::from_entity(entity)
    }

    /// Returns the most recent actions of a guild, newest first.
    pub async fn list_recent(&self, guild_id: u64, limit: u64) -> Result<Vec<ModLog>, AppError> {
        entity::prelude::ModLog::find()
            .filter(entity::mod_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::mod_log::Column::CreatedAt)
            .order_by_desc(entity::mod_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(ModLog::from_entity)
            .collect()
    }
}
