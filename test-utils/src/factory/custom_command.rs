//! Custom command factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating custom command rows.
///
/// Defaults to a command named `cmd{id}` replying with `"Hello!"`.
pub struct CustomCommandFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    response: String,
    uses: i32,
}

impl<'a> CustomCommandFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            name: format!("cmd{}", next_id()),
            response: "Hello!".to_string(),
            uses: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    pub async fn build(self) -> Result<entity::custom_command::Model, DbErr> {
        entity::custom_command::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            response: ActiveValue::Set(self.response),
            created_by: ActiveValue::Set("dashboard".to_string()),
            uses: ActiveValue::Set(self.uses),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_command(
    db: &DatabaseConnection,
    guild_id: &str,
    name: &str,
) -> Result<entity::custom_command::Model, DbErr> {
    CustomCommandFactory::new(db, guild_id).name(name).build().await
}
