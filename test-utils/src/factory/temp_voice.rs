//! Factories for temp voice creators & the channels they spawn.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating temp voice creator rows.
///
/// Defaults mirror a freshly created creator: `"{user}'s Channel"` template,
/// no user limit, 64 kbps bitrate & every owner permission enabled.
pub struct TempCreatorFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    name_template: String,
    default_limit: i32,
}

impl<'a> TempCreatorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: next_id().to_string(),
            name_template: "{user}'s Channel".to_string(),
            default_limit: 0,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn name_template(mut self, name_template: impl Into<String>) -> Self {
        self.name_template = name_template.into();
        self
    }

    pub fn default_limit(mut self, default_limit: i32) -> Self {
        self.default_limit = default_limit;
        self
    }

    pub async fn build(self) -> Result<entity::temp_creator::Model, DbErr> {
        entity::temp_creator::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            category_id: ActiveValue::Set(None),
            name_template: ActiveValue::Set(self.name_template),
            numbering_type: ActiveValue::Set("number".to_string()),
            position: ActiveValue::Set("bottom".to_string()),
            default_limit: ActiveValue::Set(self.default_limit),
            default_bitrate: ActiveValue::Set(64),
            allow_rename: ActiveValue::Set(true),
            allow_limit: ActiveValue::Set(true),
            allow_lock: ActiveValue::Set(true),
            allow_hide: ActiveValue::Set(true),
            allow_kick: ActiveValue::Set(true),
            allow_permit: ActiveValue::Set(true),
            allow_bitrate: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a temp channel row owned by `owner_id`.
pub async fn create_temp_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    owner_id: &str,
    creator_id: Option<i32>,
) -> Result<entity::temp_channel::Model, DbErr> {
    entity::temp_channel::ActiveModel {
        channel_id: ActiveValue::Set(next_id().to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        owner_id: ActiveValue::Set(owner_id.to_string()),
        creator_id: ActiveValue::Set(creator_id),
        name: ActiveValue::Set("Temp".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
