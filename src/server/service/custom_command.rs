//! Custom text command service.

use sea_orm::DatabaseConnection;

use crate::{
    model::command::CreateCustomCommandDto,
    server::{
        data::custom_command::CustomCommandRepository,
        error::AppError,
        model::custom_command::{normalize_command_name, CustomCommand, UpsertCustomCommandParam},
    },
};

pub struct CustomCommandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomCommandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<CustomCommand>, AppError> {
        CustomCommandRepository::new(self.db).get_all(guild_id).await
    }

    /// Creates a command or replaces the response of an existing one with the same name.
    ///
    /// # Returns
    /// - `Ok(CustomCommand)` - The stored command
    /// - `Err(AppError::BadRequest)` - Name or response empty after normalization
    pub async fn upsert(
        &self,
        guild_id: u64,
        dto: CreateCustomCommandDto,
    ) -> Result<CustomCommand, AppError> {
        let param = UpsertCustomCommandParam::from(dto);

        if param.name.is_empty() {
            return Err(AppError::BadRequest("Command name is required".to_string()));
        }
        if param.name.contains(char::is_whitespace) {
            return Err(AppError::BadRequest(
                "Command name must be a single word".to_string(),
            ));
        }
        if param.response.is_empty() {
            return Err(AppError::BadRequest("Response is required".to_string()));
        }

        CustomCommandRepository::new(self.db)
            .upsert(guild_id, param)
            .await
    }

    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<(), AppError> {
        let name = normalize_command_name(name);

        if !CustomCommandRepository::new(self.db)
            .delete_by_name(guild_id, &name)
            .await?
        {
            return Err(AppError::NotFound("Command not found".to_string()));
        }

        Ok(())
    }

    /// Resolves a prefixed chat message to a custom command and counts the use.
    ///
    /// # Arguments
    /// - `prefix` - Guild command prefix
    /// - `content` - Full message content
    ///
    /// # Returns
    /// - `Ok(Some(CustomCommand))` - The message invoked a stored command
    /// - `Ok(None)` - No prefix or no such command
    pub async fn trigger(
        &self,
        guild_id: u64,
        prefix: &str,
        content: &str,
    ) -> Result<Option<CustomCommand>, AppError> {
        let Some(name) = command_name(prefix, content) else {
            return Ok(None);
        };

        let repo = CustomCommandRepository::new(self.db);
        let Some(command) = repo.find_by_name(guild_id, &name).await? else {
            return Ok(None);
        };

        repo.increment_uses(command.id).await?;

        Ok(Some(command))
    }
}

/// Extracts the lower-cased first word after `prefix`.
fn command_name(prefix: &str, content: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.strip_prefix(prefix)?;
    let name = rest.split_whitespace().next()?;

    Some(name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn extracts_command_name() {
        assert_eq!(command_name("!", "!Rules please"), Some("rules".to_string()));
        assert_eq!(command_name("!", "rules"), None);
        assert_eq!(command_name("!", "! rules"), Some("rules".to_string()));
        assert_eq!(command_name("!", "!"), None);
        assert_eq!(command_name("", "!rules"), None);
    }

    /// Tests that names are normalized and empty values rejected.
    ///
    /// Expected: stored as "faq", Err(BadRequest) for blank name or response
    #[tokio::test]
    async fn upsert_normalizes_name() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::CustomCommand)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = CustomCommandService::new(db);
        let command = service
            .upsert(
                1,
                CreateCustomCommandDto {
                    name: " !FAQ ".to_string(),
                    response: "Read the docs".to_string(),
                },
            )
            .await?;
        assert_eq!(command.name, "faq");
        assert_eq!(command.created_by, "dashboard");

        for (name, response) in [("!", "text"), ("faq", "   ")] {
            let result = service
                .upsert(
                    1,
                    CreateCustomCommandDto {
                        name: name.to_string(),
                        response: response.to_string(),
                    },
                )
                .await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    /// Tests that triggering a command counts its use.
    ///
    /// Expected: command found, uses incremented, unknown command ignored
    #[tokio::test]
    async fn trigger_counts_uses() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::CustomCommand)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_command(db, "1", "rules").await?;

        let service = CustomCommandService::new(db);
        let command = service.trigger(1, "!", "!RULES now").await?;
        assert!(command.is_some());
        assert!(service.trigger(1, "!", "!unknown").await?.is_none());

        let stored = service.get_all(1).await?;
        assert_eq!(stored[0].uses, 1);

        Ok(())
    }

    /// Tests deleting a command that does not exist.
    ///
    /// Expected: Err(NotFound)
    #[tokio::test]
    async fn delete_missing_command() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::CustomCommand)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = CustomCommandService::new(db).delete(1, "nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
