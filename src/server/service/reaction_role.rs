//! Reaction role service.

use sea_orm::DatabaseConnection;

use crate::{
    model::reaction_role::{CreateReactionRoleDto, UpdateReactionRoleDto, MAX_REACTION_ROLES},
    server::{
        data::reaction_role::ReactionRoleRepository,
        error::AppError,
        model::reaction_role::{CreateReactionRolesParam, ReactionRole},
    },
};

pub struct ReactionRoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<ReactionRole>, AppError> {
        ReactionRoleRepository::new(self.db).get_all(guild_id).await
    }

    /// Creates one record per offered role, all sharing the panel fields.
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionRole>)` - The created records, still pending a message
    /// - `Err(AppError::BadRequest)` - No channel, no roles, too many roles or an entry
    ///   without role or emoji
    pub async fn create(
        &self,
        guild_id: u64,
        dto: CreateReactionRoleDto,
    ) -> Result<Vec<ReactionRole>, AppError> {
        let channel_id = dto.channel_id.trim().to_string();
        if channel_id.is_empty() {
            return Err(AppError::BadRequest("Channel is required".to_string()));
        }

        let roles: Vec<_> = dto
            .roles
            .into_iter()
            .filter(|entry| !entry.role_id.trim().is_empty())
            .collect();
        if roles.is_empty() {
            return Err(AppError::BadRequest(
                "At least one role is required".to_string(),
            ));
        }
        if roles.len() > MAX_REACTION_ROLES {
            return Err(AppError::BadRequest(format!(
                "At most {} roles are allowed",
                MAX_REACTION_ROLES
            )));
        }

        let kind = match dto.kind.as_str() {
            "button" | "reaction" => dto.kind,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unknown reaction role type '{}'",
                    other
                )))
            }
        };
        if kind == "reaction" && roles.iter().any(|entry| entry.emoji.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Reaction roles need an emoji for every role".to_string(),
            ));
        }

        ReactionRoleRepository::new(self.db)
            .create_many(
                guild_id,
                CreateReactionRolesParam {
                    channel_id,
                    title: dto.title.trim().to_string(),
                    description: dto.description.unwrap_or_default(),
                    kind,
                    color: dto.color,
                    roles,
                },
            )
            .await
    }

    pub async fn update(
        &self,
        guild_id: u64,
        id: i32,
        dto: UpdateReactionRoleDto,
    ) -> Result<ReactionRole, AppError> {
        ReactionRoleRepository::new(self.db)
            .update(guild_id, id, dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Reaction role not found".to_string()))
    }

    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<(), AppError> {
        if !ReactionRoleRepository::new(self.db)
            .delete(guild_id, id)
            .await?
        {
            return Err(AppError::NotFound("Reaction role not found".to_string()));
        }

        Ok(())
    }

    /// Returns all rows of the panel that row `id` belongs to.
    ///
    /// # Returns
    /// - `Ok(Vec<ReactionRole>)` - Rows in entry order, never empty
    /// - `Err(AppError::NotFound)` - No such row in the guild
    pub async fn get_panel(&self, guild_id: u64, id: i32) -> Result<Vec<ReactionRole>, AppError> {
        let panel = ReactionRoleRepository::new(self.db)
            .get_panel(guild_id, id)
            .await?;
        if panel.is_empty() {
            return Err(AppError::NotFound("Reaction role not found".to_string()));
        }

        Ok(panel)
    }

    /// Records the message a panel was posted as, so reactions on it resolve.
    pub async fn mark_panel_sent(
        &self,
        panel: &[ReactionRole],
        message_id: &str,
    ) -> Result<(), AppError> {
        let ids: Vec<i32> = panel.iter().map(|row| row.id).collect();
        ReactionRoleRepository::new(self.db)
            .set_message_id(&ids, message_id)
            .await
    }

    /// Looks up the row behind a reaction role button.
    pub async fn role_for_button(
        &self,
        guild_id: u64,
        id: i32,
    ) -> Result<Option<ReactionRole>, AppError> {
        ReactionRoleRepository::new(self.db)
            .find_by_id(guild_id, id)
            .await
    }

    /// Resolves a reaction on a posted panel message to the role it grants.
    pub async fn role_for_reaction(
        &self,
        message_id: &str,
        emoji: &str,
    ) -> Result<Option<ReactionRole>, AppError> {
        ReactionRoleRepository::new(self.db)
            .find_by_message_emoji(message_id, emoji)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reaction_role::ReactionRoleEntryDto;
    use test_utils::builder::TestBuilder;

    fn create_dto(channel_id: &str, roles: usize) -> CreateReactionRoleDto {
        CreateReactionRoleDto {
            title: "Pick roles".to_string(),
            description: None,
            channel_id: channel_id.to_string(),
            kind: "button".to_string(),
            roles: (0..roles)
                .map(|i| ReactionRoleEntryDto {
                    emoji: "✅".to_string(),
                    role_id: format!("{}", 100 + i),
                    label: format!("Role {}", i),
                })
                .collect(),
            color: "#5865F2".to_string(),
        }
    }

    /// Tests role count limits and the required channel.
    ///
    /// Expected: Err(BadRequest) for 0 or 11 roles and a blank channel, Ok for 10
    #[tokio::test]
    async fn enforces_role_limits() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ReactionRole)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ReactionRoleService::new(db);
        for dto in [create_dto("10", 0), create_dto("10", 11), create_dto(" ", 1)] {
            assert!(matches!(
                service.create(1, dto).await,
                Err(AppError::BadRequest(_))
            ));
        }

        let created = service.create(1, create_dto("10", 10)).await?;
        assert_eq!(created.len(), 10);
        assert!(created.iter().all(|rr| rr.message_id == "pending"));

        Ok(())
    }

    /// Tests resolving a panel and storing its message id.
    ///
    /// Expected: both rows grouped, reactions resolve after sending, Err(NotFound) for
    /// unknown ids
    #[tokio::test]
    async fn sent_panel_resolves_reactions() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ReactionRole)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ReactionRoleService::new(db);
        let created = service.create(1, create_dto("10", 2)).await?;

        let panel = service.get_panel(1, created[0].id).await?;
        assert_eq!(panel.len(), 2);

        service.mark_panel_sent(&panel, "777").await?;
        let role = service.role_for_reaction("777", "✅").await?;
        assert!(role.is_some());

        let button = service.role_for_button(1, created[1].id).await?;
        assert_eq!(button.map(|rr| rr.role_id), Some("101".to_string()));

        assert!(matches!(
            service.get_panel(1, 404).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests updating and deleting unknown records.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn missing_record_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ReactionRole)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ReactionRoleService::new(db);
        assert!(matches!(
            service
                .update(1, 404, UpdateReactionRoleDto::default())
                .await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(1, 404).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
