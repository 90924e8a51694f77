//! Warnings & moderation log service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        guild_config::GuildConfigRepository,
        member::MemberRepository,
        moderation::{ModLogRepository, WarningRepository},
    },
    error::AppError,
    model::moderation::{ModLog, ModerationActionParam, Warning},
};

/// Punishment applied once a member reaches the warning threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdAction {
    Mute,
    Kick,
    Ban,
}

impl ThresholdAction {
    /// Parses the configured `warn_action`, defaulting to mute.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "kick" => Self::Kick,
            "ban" => Self::Ban,
            _ => Self::Mute,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }
}

/// Result of warning a member.
#[derive(Debug, Clone)]
pub struct WarnOutcome {
    pub warning: Warning,
    /// Warning count of the member including the new one.
    pub count: i32,
    /// Action to apply when the threshold has been reached.
    pub action: Option<ThresholdAction>,
    pub threshold: i32,
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists warnings newest first, optionally only those of one member.
    pub async fn warnings(
        &self,
        guild_id: u64,
        user_id: Option<&str>,
    ) -> Result<Vec<Warning>, AppError> {
        let user_id = user_id.map(str::trim).filter(|id| !id.is_empty());
        WarningRepository::new(self.db).list(guild_id, user_id).await
    }

    /// Deletes every warning of a member and resets their counter.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted warnings
    pub async fn clear_warnings(&self, guild_id: u64, user_id: &str) -> Result<u64, AppError> {
        let deleted = WarningRepository::new(self.db)
            .delete_for_user(guild_id, user_id)
            .await?;
        MemberRepository::new(self.db)
            .reset_warnings(guild_id, user_id)
            .await?;

        Ok(deleted)
    }

    pub async fn mod_logs(&self, guild_id: u64, limit: u64) -> Result<Vec<ModLog>, AppError> {
        ModLogRepository::new(self.db)
            .list_recent(guild_id, limit)
            .await
    }

    pub async fn log_action(
        &self,
        guild_id: u64,
        action: &str,
        param: &ModerationActionParam,
    ) -> Result<ModLog, AppError> {
        ModLogRepository::new(self.db)
            .create(guild_id, action, param)
            .await
    }

    /// Records a warning, logs it and decides whether the threshold action applies.
    ///
    /// The action itself is carried out by the caller since it needs Discord access.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Warned member, moderator and reason
    ///
    /// # Returns
    /// - `Ok(WarnOutcome)` - Stored warning, new count and pending action
    /// - `Err(AppError)` - Database error
    pub async fn warn(
        &self,
        guild_id: u64,
        param: ModerationActionParam,
    ) -> Result<WarnOutcome, AppError> {
        let settings = GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?
            .settings;

        let warning = WarningRepository::new(self.db)
            .create(guild_id, &param)
            .await?;
        self.log_action(guild_id, "warn", &param).await?;

        let count = MemberRepository::new(self.db)
            .increment_warnings(guild_id, &param.user_id)
            .await?;

        let threshold = settings.warn_threshold;
        let action = (threshold > 0 && count >= threshold)
            .then(|| ThresholdAction::from_setting(&settings.warn_action));

        Ok(WarnOutcome {
            warning,
            count,
            action,
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::guild::UpdateGuildConfigDto, server::service::guild::GuildService};
    use test_utils::{builder::TestBuilder, factory};

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .with_table(entity::prelude::GuildMember)
            .with_table(entity::prelude::Warning)
            .with_table(entity::prelude::ModLog)
            .build()
            .await
            .unwrap()
    }

    fn warn_param(user_id: &str) -> ModerationActionParam {
        ModerationActionParam {
            user_id: user_id.to_string(),
            moderator_id: "900".to_string(),
            reason: "spam".to_string(),
        }
    }

    /// Tests that the threshold action is only returned from the threshold on.
    ///
    /// Expected: no action for the first warning, kick for the second
    #[tokio::test]
    async fn decides_action_at_threshold() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        GuildService::new(db)
            .update(
                1,
                UpdateGuildConfigDto {
                    warn_threshold: Some(2),
                    warn_action: Some("kick".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await?;

        let service = ModerationService::new(db);
        let first = service.warn(1, warn_param("5")).await?;
        let second = service.warn(1, warn_param("5")).await?;

        assert_eq!(first.count, 1);
        assert_eq!(first.action, None);
        assert_eq!(second.count, 2);
        assert_eq!(second.action, Some(ThresholdAction::Kick));
        assert_eq!(service.mod_logs(1, 50).await?.len(), 2);

        Ok(())
    }

    /// Tests clearing the warnings of one member.
    ///
    /// Expected: deleted count returned and the member counter reset
    #[tokio::test]
    async fn clear_resets_counter() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        factory::guild_member::GuildMemberFactory::new(db, "1")
            .user_id("5")
            .warnings(2)
            .build()
            .await?;
        factory::moderation::WarningFactory::new(db, "1", "5").build().await?;
        factory::moderation::WarningFactory::new(db, "1", "5").build().await?;
        factory::moderation::WarningFactory::new(db, "1", "6").build().await?;

        let service = ModerationService::new(db);
        let deleted = service.clear_warnings(1, "5").await?;

        assert_eq!(deleted, 2);
        assert_eq!(service.warnings(1, None).await?.len(), 1);
        let member = MemberRepository::new(db).find(1, "5").await?.unwrap();
        assert_eq!(member.warnings, 0);

        Ok(())
    }

    /// Tests that a blank user filter lists every warning.
    ///
    /// Expected: all warnings of the guild
    #[tokio::test]
    async fn blank_filter_lists_all() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();

        factory::moderation::WarningFactory::new(db, "1", "5").build().await?;
        factory::moderation::WarningFactory::new(db, "1", "6").build().await?;

        let service = ModerationService::new(db);
        assert_eq!(service.warnings(1, Some("  ")).await?.len(), 2);
        assert_eq!(service.warnings(1, Some("6")).await?.len(), 1);

        Ok(())
    }
}
