//! Guild configuration, permissions & statistics service.

use sea_orm::DatabaseConnection;

use crate::{
    model::guild::{GuildStatsDto, PermissionsDto, UpdatePermissionDto},
    server::{
        data::{
            custom_command::CustomCommandRepository,
            guild_config::GuildConfigRepository,
            member::MemberRepository,
            moderation::{ModLogRepository, WarningRepository},
            news::NewsRepository,
        },
        error::AppError,
        model::guild_config::{GuildConfig, UpdateGuildConfigParam},
    },
};

/// Number of members listed on the statistics overview.
const STATS_TOP_USERS: u64 = 5;
/// Number of moderation actions listed on the statistics overview.
const STATS_RECENT_ACTIONS: u64 = 10;

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every stored guild configuration.
    pub async fn get_all(&self) -> Result<Vec<GuildConfig>, AppError> {
        GuildConfigRepository::new(self.db).get_all().await
    }

    /// Gets the configuration of a guild, creating one with defaults when absent.
    pub async fn get(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await
    }

    /// Merges the provided settings over the stored configuration.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Partial update, absent fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The merged configuration after saving
    /// - `Err(AppError)` - Database or serialization error
    pub async fn update(
        &self,
        guild_id: u64,
        param: UpdateGuildConfigParam,
    ) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        let current = repo.get_or_create(guild_id).await?;
        let settings = param.apply(current.settings)?;

        repo.save(guild_id, &settings).await
    }

    /// Builds the dashboard overview of a guild.
    pub async fn stats(&self, guild_id: u64) -> Result<GuildStatsDto, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let total_users = member_repo.count(guild_id).await?;
        let total_warnings = WarningRepository::new(self.db).count(guild_id).await?;
        let total_commands = CustomCommandRepository::new(self.db).count(guild_id).await?;
        let total_news = NewsRepository::new(self.db).count(guild_id).await?;

        let top_users = member_repo
            .leaderboard(guild_id, STATS_TOP_USERS)
            .await?
            .into_iter()
            .map(|member| member.into_dto())
            .collect();

        let recent_mod_actions = ModLogRepository::new(self.db)
            .list_recent(guild_id, STATS_RECENT_ACTIONS)
            .await?
            .into_iter()
            .map(|log| log.into_dto())
            .collect();

        Ok(GuildStatsDto {
            total_users,
            total_warnings,
            total_commands,
            total_news,
            top_users,
            recent_mod_actions,
        })
    }

    pub async fn permissions(&self, guild_id: u64) -> Result<PermissionsDto, AppError> {
        let settings = self.get(guild_id).await?.settings;

        Ok(PermissionsDto {
            command_permissions: settings.command_permissions,
            admin_roles: settings.admin_roles,
            mod_roles: settings.mod_roles,
        })
    }

    /// Sets the roles allowed to use one command. An empty list removes the restriction.
    pub async fn set_permission(
        &self,
        guild_id: u64,
        dto: UpdatePermissionDto,
    ) -> Result<PermissionsDto, AppError> {
        let command = dto.command.trim().to_lowercase();
        if command.is_empty() {
            return Err(AppError::BadRequest("Command is required".to_string()));
        }

        let repo = GuildConfigRepository::new(self.db);
        let mut settings = repo.get_or_create(guild_id).await?.settings;

        if dto.role_ids.is_empty() {
            settings.command_permissions.remove(&command);
        } else {
            settings.command_permissions.insert(command, dto.role_ids);
        }

        let settings = repo.save(guild_id, &settings).await?.settings;

        Ok(PermissionsDto {
            command_permissions: settings.command_permissions,
            admin_roles: settings.admin_roles,
            mod_roles: settings.mod_roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::guild::UpdateGuildConfigDto;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a partial update keeps every other stored setting.
    ///
    /// Expected: Ok with prefix changed and the earlier language kept
    #[tokio::test]
    async fn update_merges_settings() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = GuildService::new(db);
        service
            .update(
                1,
                UpdateGuildConfigDto {
                    language: Some("en".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await?;
        let config = service
            .update(
                1,
                UpdateGuildConfigDto {
                    prefix: Some("?".to_string()),
                    ..Default::default()
                }
                .into(),
            )
            .await?;

        assert_eq!(config.settings.language, "en");
        assert_eq!(config.settings.prefix, "?");
        assert_eq!(service.get(1).await?.settings.prefix, "?");

        Ok(())
    }

    /// Tests setting and removing a command permission.
    ///
    /// Expected: entry present after set, absent after an empty list
    #[tokio::test]
    async fn empty_role_list_removes_permission() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = GuildService::new(db);
        let permissions = service
            .set_permission(
                1,
                UpdatePermissionDto {
                    command: "Warn".to_string(),
                    role_ids: vec!["10".to_string()],
                },
            )
            .await?;
        assert_eq!(
            permissions.command_permissions.get("warn"),
            Some(&vec!["10".to_string()])
        );

        let permissions = service
            .set_permission(
                1,
                UpdatePermissionDto {
                    command: "warn".to_string(),
                    role_ids: Vec::new(),
                },
            )
            .await?;
        assert!(permissions.command_permissions.is_empty());

        Ok(())
    }

    /// Tests the statistics overview limits.
    ///
    /// Expected: counts over all rows, top 5 users and 10 recent actions
    #[tokio::test]
    async fn stats_limits_lists() -> Result<(), AppError> {
        let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        for xp in 1..=7 {
            factory::create_member_with_xp(db, "1", xp * 100).await?;
        }
        for _ in 0..12 {
            factory::moderation::ModLogFactory::new(db, "1").build().await?;
        }
        factory::create_command(db, "1", "rules").await?;

        let stats = GuildService::new(db).stats(1).await?;

        assert_eq!(stats.total_users, 7);
        assert_eq!(stats.total_commands, 1);
        assert_eq!(stats.total_news, 0);
        assert_eq!(stats.top_users.len(), 5);
        assert_eq!(stats.top_users[0].xp, 700);
        assert_eq!(stats.recent_mod_actions.len(), 10);

        Ok(())
    }
}
