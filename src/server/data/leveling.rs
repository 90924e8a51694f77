//! Level reward and voice session repositories.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::leveling::{CreateLevelRewardParam, LevelReward, VoiceSession},
};

/// Repository for rewards granted when members reach a level.
pub struct LevelRewardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelRewardRepository<'a> {
    /// Creates a new LevelRewardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LevelRewardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the rewards of a guild ordered by level.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<LevelReward>, AppError> {
        entity::prelude::LevelReward::find()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::level_reward::Column::Level)
            .order_by_asc(entity::level_reward::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LevelReward::from_entity)
            .collect()
    }

    /// Returns the enabled rewards unlocked exactly at `level`.
    pub async fn get_enabled_for_level(
        &self,
        guild_id: u64,
        level: i32,
    ) -> Result<Vec<LevelReward>, AppError> {
        entity::prelude::LevelReward::find()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::level_reward::Column::Level.eq(level))
            .filter(entity::level_reward::Column::Enabled.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(LevelReward::from_entity)
            .collect()
    }

    pub async fn create(
        &self,
        guild_id: u64,
        param: CreateLevelRewardParam,
    ) -> Result<LevelReward, AppError> {
        let entity = entity::level_reward::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            level: ActiveValue::Set(param.level),
            reward_type: ActiveValue::Set(param.reward_type),
            reward_value: ActiveValue::Set(param.reward_value),
            reward_name: ActiveValue::Set(param.reward_name),
            enabled: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LevelReward::from_entity(entity)
    }

    /// Enables or disables a reward.
    ///
    /// # Returns
    /// - `Ok(Some(LevelReward))` - The updated reward
    /// - `Ok(None)` - No reward with that id in the guild
    /// - `Err(AppError)` - Database error during update
    pub async fn set_enabled(
        &self,
        guild_id: u64,
        id: i32,
        enabled: bool,
    ) -> Result<Option<LevelReward>, AppError> {
        let Some(existing) = entity::prelude::LevelReward::find_by_id(id)
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.enabled = ActiveValue::Set(enabled);
        let updated = active.update(self.db).await?;

        Ok(Some(LevelReward::from_entity(updated)?))
    }

    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::LevelReward::delete_many()
            .filter(entity::level_reward::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::level_reward::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Repository for time spent in voice channels.
pub struct VoiceSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a session for a member who joined a voice channel.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `channel_id` - Joined voice channel
    /// - `eligible` - Whether the session may earn XP when it ends
    /// - `started_at` - Join time
    pub async fn start(
        &self,
        guild_id: u64,
        user_id: &str,
        channel_id: &str,
        eligible: bool,
        started_at: DateTime<Utc>,
    ) -> Result<VoiceSession, AppError> {
        let entity = entity::voice_session::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            eligible: ActiveValue::Set(eligible),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(None),
            xp_earned: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        VoiceSession::from_entity(entity)
    }

    /// Finds the session a member has not yet left.
    pub async fn find_open(
        &self,
        guild_id: u64,
        user_id: &str,
    ) -> Result<Option<VoiceSession>, AppError> {
        entity::prelude::VoiceSession::find()
            .filter(entity::voice_session::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::voice_session::Column::UserId.eq(user_id))
            .filter(entity::voice_session::Column::EndedAt.is_null())
            .order_by_desc(entity::voice_session::Column::Id)
            .one(self.db)
            .await?
            .map(VoiceSession::from_entity)
            .transpose()
    }

    /// Closes a session with the XP it earned.
    pub async fn end(
        &self,
        id: i32,
        ended_at: DateTime<Utc>,
        xp_earned: i64,
    ) -> Result<(), AppError> {
        entity::voice_session::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ended_at: ActiveValue::Set(Some(ended_at)),
            xp_earned: ActiveValue::Set(xp_earned),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Returns the latest sessions of a guild, newest first.
    pub async fn latest(&self, guild_id: u64, limit: u64) -> Result<Vec<VoiceSession>, AppError> {
        entity::prelude::VoiceSession::find()
            .filter(entity::voice_session::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::voice_session::Column::StartedAt)
            .order_by_desc(entity::voice_session::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(VoiceSession::from_entity)
            .collect()
    }

    /// Returns `(ended, active)` session counts of a guild.
    pub async fn stats(&self, guild_id: u64) -> Result<(u64, u64), AppError> {
        let ended = entity::prelude::VoiceSession::find()
            .filter(entity::voice_session::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::voice_session::Column::EndedAt.is_not_null())
            .count(self.db)
            .await?;
        let active = entity::prelude::VoiceSession::find()
            .filter(entity::voice_session::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::voice_session::Column::EndedAt.is_null())
            .count(self.db)
            .await?;

        Ok((ended, active))
    }
}
