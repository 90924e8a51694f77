//! Factories for level rewards & voice sessions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating level reward rows.
///
/// Defaults to an enabled role reward at level 5.
pub struct LevelRewardFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    level: i32,
    reward_type: String,
    reward_value: String,
    enabled: bool,
}

impl<'a> LevelRewardFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            level: 5,
            reward_type: "role".to_string(),
            reward_value: next_id().to_string(),
            enabled: true,
        }
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn reward(mut self, reward_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.reward_type = reward_type.into();
        self.reward_value = value.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::level_reward::Model, DbErr> {
        entity::level_reward::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            level: ActiveValue::Set(self.level),
            reward_type: ActiveValue::Set(self.reward_type),
            reward_value: ActiveValue::Set(self.reward_value),
            reward_name: ActiveValue::Set(None),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating voice session rows.
///
/// Defaults to an open, eligible session that started now.
pub struct VoiceSessionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    channel_id: String,
    eligible: bool,
    started_at: DateTime<Utc>,
}

impl<'a> VoiceSessionFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            channel_id: next_id().to_string(),
            eligible: true,
            started_at: Utc::now(),
        }
    }

    pub fn eligible(mut self, eligible: bool) -> Self {
        self.eligible = eligible;
        self
    }

    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub async fn build(self) -> Result<entity::voice_session::Model, DbErr> {
        entity::voice_session::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            channel_id: ActiveValue::Set(self.channel_id),
            eligible: ActiveValue::Set(self.eligible),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(None),
            xp_earned: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
