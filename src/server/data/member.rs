//! Guild member data repository.
//!
//! Tracks the per-guild leveling state (XP, level, message count) and the warning
//! counter of Discord users. Members are created on first activity.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::member::{Member, XpGain},
    util::level::calculate_level,
};

/// Repository providing database operations for guild members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(
        &self,
        guild_id: u64,
        user_id: &str,
    ) -> Result<Option<entity::guild_member::Model>, AppError> {
        Ok(entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?)
    }

    async fn get_or_create_entity(
        &self,
        guild_id: u64,
        user_id: &str,
    ) -> Result<entity::guild_member::Model, AppError> {
        if let Some(existing) = self.find_entity(guild_id, user_id).await? {
            return Ok(existing);
        }

        Ok(entity::guild_member::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(0),
            messages: ActiveValue::Set(0),
            warnings: ActiveValue::Set(0),
            last_xp_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?)
    }

    /// Finds a member of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member has been active in the guild before
    /// - `Ok(None)` - No record for this user in the guild
    /// - `Err(AppError)` - Database error during query
    pub async fn find(&self, guild_id: u64, user_id: &str) -> Result<Option<Member>, AppError> {
        self.find_entity(guild_id, user_id)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Returns a member, creating an empty record when the user is unknown.
    pub async fn get_or_create(&self, guild_id: u64, user_id: &str) -> Result<Member, AppError> {
        Member::from_entity(self.get_or_create_entity(guild_id, user_id).await?)
    }

    /// Awards XP to a member and recalculates their level.
    ///
    /// Message based gains also bump the message counter and record `now` as the time
    /// of the last award, which the caller uses for the cooldown check. Voice based gains
    /// leave both untouched.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `amount` - XP to add
    /// - `now` - Time of the activity
    /// - `from_message` - Whether the XP was earned by sending a message
    ///
    /// # Returns
    /// - `Ok(XpGain)` - Updated member and the level before the award
    /// - `Err(AppError)` - Database error during update
    pub async fn add_xp(
        &self,
        guild_id: u64,
        user_id: &str,
        amount: i64,
        now: DateTime<Utc>,
        from_message: bool,
    ) -> Result<XpGain, AppError> {
        let existing = self.get_or_create_entity(guild_id, user_id).await?;
        let previous_level = existing.level;
        let xp = existing.xp.saturating_add(amount);
        let messages = existing.messages.saturating_add(i64::from(from_message));

        let mut active = existing.into_active_model();
        active.xp = ActiveValue::Set(xp);
        active.level = ActiveValue::Set(calculate_level(xp));
        if from_message {
            active.messages = ActiveValue::Set(messages);
            active.last_xp_at = ActiveValue::Set(Some(now));
        }
        let updated = active.update(self.db).await?;

        Ok(XpGain {
            member: Member::from_entity(updated)?,
            previous_level,
        })
    }

    /// Overwrites the XP and level of a member, creating the member if needed.
    pub async fn set_progress(
        &self,
        guild_id: u64,
        user_id: &str,
        xp: i64,
        level: i32,
    ) -> Result<Member, AppError> {
        let existing = self.get_or_create_entity(guild_id, user_id).await?;

        let mut active = existing.into_active_model();
        active.xp = ActiveValue::Set(xp);
        active.level = ActiveValue::Set(level);
        let updated = active.update(self.db).await?;

        Member::from_entity(updated)
    }

    /// Counts a message without awarding XP.
    pub async fn count_message(&self, guild_id: u64, user_id: &str) -> Result<(), AppError> {
        let existing = self.get_or_create_entity(guild_id, user_id).await?;
        let messages = existing.messages + 1;

        let mut active = existing.into_active_model();
        active.messages = ActiveValue::Set(messages);
        active.update(self.db).await?;

        Ok(())
    }

    /// Increments the warning counter of a member and returns the new count.
    pub async fn increment_warnings(&self, guild_id: u64, user_id: &str) -> Result<i32, AppError> {
        let existing = self.get_or_create_entity(guild_id, user_id).await?;
        let warnings = existing.warnings + 1;

        let mut active = existing.into_active_model();
        active.warnings = ActiveValue::Set(warnings);
        active.update(self.db).await?;

        Ok(warnings)
    }

    /// Resets the warning counter of a member if the member exists.
    pub async fn reset_warnings(&self, guild_id: u64, user_id: &str) -> Result<(), AppError> {
        entity::prelude::GuildMember::update_many()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_member::Column::UserId.eq(user_id))
            .col_expr(
                entity::guild_member::Column::Warnings,
                sea_orm::sea_query::Expr::value(0),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns the members of a guild with the most XP, highest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of members to return
    pub async fn leaderboard(&self, guild_id: u64, limit: u64) -> Result<Vec<Member>, AppError> {
        entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::guild_member::Column::Xp)
            .order_by_asc(entity::guild_member::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Returns the 1-based leaderboard rank of a member.
    pub async fn rank(&self, guild_id: u64, xp: i64) -> Result<u64, AppError> {
        let ahead = entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_member::Column::Xp.gt(xp))
            .count(self.db)
            .await?;

        Ok(ahead + 1)
    }

    /// Counts the tracked members of a guild.
    pub async fn count(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::GuildMember::find()
            .filter(entity::guild_member::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?)
    }
}
