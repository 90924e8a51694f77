//! Factories for warnings & moderation log entries.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating warning rows.
pub struct WarningFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    moderator_id: String,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'a> WarningFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            moderator_id: "1".to_string(),
            reason: "Spam".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Shifts the creation time into the past by the given number of minutes.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = Utc::now() - Duration::minutes(minutes);
        self
    }

    pub async fn build(self) -> Result<entity::warning::Model, DbErr> {
        entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            moderator_id: ActiveValue::Set(self.moderator_id),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating moderation log rows.
pub struct ModLogFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    action: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl<'a> ModLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            action: "warn".to_string(),
            user_id: "2".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = Utc::now() - Duration::minutes(minutes);
        self
    }

    pub async fn build(self) -> Result<entity::mod_log::Model, DbErr> {
        entity::mod_log::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            action: ActiveValue::Set(self.action),
            user_id: ActiveValue::Set(self.user_id),
            moderator_id: ActiveValue::Set("1".to_string()),
            reason: ActiveValue::Set("Test".to_string()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
