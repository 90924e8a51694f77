//! Key/value storage for bot credentials saved from the dashboard.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct BotSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stored value for `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::BotSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Inserts or replaces the value for `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::BotSetting::insert(entity::bot_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::bot_setting::Column::Key)
                .update_column(entity::bot_setting::Column::Value)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
