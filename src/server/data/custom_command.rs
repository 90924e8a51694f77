//! Custom command data repository.
//!
//! Custom commands are guild specific text responses triggered by `<prefix><name>`.
//! Names are unique per guild and stored normalized (lower-case, no leading prefix).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::custom_command::{CustomCommand, UpsertCustomCommandParam},
};

pub struct CustomCommandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomCommandRepository<'a> {
    /// Creates a new CustomCommandRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomCommandRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all commands of a guild ordered by name.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<CustomCommand>, AppError> {
        entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::custom_command::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(CustomCommand::from_entity)
            .collect()
    }

    /// Finds a command by its normalized name.
    pub async fn find_by_name(
        &self,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<CustomCommand>, AppError> {
        entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_command::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(CustomCommand::from_entity)
            .transpose()
    }

    /// Creates a command or replaces the response of an existing one with the same name.
    ///
    /// The usage counter and creation metadata of an existing command are preserved.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Normalized name, response and creator
    ///
    /// # Returns
    /// - `Ok(CustomCommand)` - The created or updated command
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: u64,
        param: UpsertCustomCommandParam,
    ) -> Result<CustomCommand, AppError> {
        let existing = entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_command::Column::Name.eq(&param.name))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.response = ActiveValue::Set(param.response);
                active.update(self.db).await?
            }
            None => {
                entity::custom_command::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    name: ActiveValue::Set(param.name),
                    response: ActiveValue::Set(param.response),
                    created_by: ActiveValue::Set(param.created_by),
                    uses: ActiveValue::Set(0),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        CustomCommand::from_entity(entity)
    }

    /// Deletes a command by name, returning whether it existed.
    pub async fn delete_by_name(&self, guild_id: u64, name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::CustomCommand::delete_many()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::custom_command::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the usage counter of a command.
    pub async fn increment_uses(&self, id: i32) -> Result<(), AppError> {
        let Some(existing) = entity::prelude::CustomCommand::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let uses = existing.uses + 1;
        let mut active = existing.into_active_model();
        active.uses = ActiveValue::Set(uses);
        active.update(self.db).await?;

        Ok(())
    }

    pub async fn count(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::CustomCommand::find()
            .filter(entity::custom_command::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?)
    }
}
