//! Guild member factory for creating leveling & warning state in tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating guild member rows.
///
/// Defaults to a fresh member with no XP, level 0, no messages and no warnings.
pub struct GuildMemberFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    xp: i64,
    level: i32,
    messages: i64,
    warnings: i32,
    last_xp_at: Option<DateTime<Utc>>,
}

impl<'a> GuildMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: next_id().to_string(),
            xp: 0,
            level: 0,
            messages: 0,
            warnings: 0,
            last_xp_at: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn messages(mut self, messages: i64) -> Self {
        self.messages = messages;
        self
    }

    pub fn warnings(mut self, warnings: i32) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn last_xp_at(mut self, last_xp_at: DateTime<Utc>) -> Self {
        self.last_xp_at = Some(last_xp_at);
        self
    }

    pub async fn build(self) -> Result<entity::guild_member::Model, DbErr> {
        entity::guild_member::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
            messages: ActiveValue::Set(self.messages),
            warnings: ActiveValue::Set(self.warnings),
            last_xp_at: ActiveValue::Set(self.last_xp_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member of the guild with the provided XP.
pub async fn create_member_with_xp(
    db: &DatabaseConnection,
    guild_id: &str,
    xp: i64,
) -> Result<entity::guild_member::Model, DbErr> {
    GuildMemberFactory::new(db, guild_id).xp(xp).build().await
}
