//! Temporary voice channel repositories.
//!
//! `TempCreatorRepository` manages the "join to create" voice channels configured per
//! guild, `TempChannelRepository` tracks the channels the bot created from them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::temp_channel::{
        CreateTempChannelParam, CreateTempCreatorParam, TempChannel, TempCreator,
        UpdateTempCreatorParam,
    },
};

/// Repository for active temporary voice channels.
pub struct TempChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TempChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the temporary channels of a guild, oldest first.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<TempChannel>, AppError> {
        entity::prelude::TempChannel::find()
            .filter(entity::temp_channel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::temp_channel::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(TempChannel::from_entity)
            .collect()
    }

    pub async fn find(&self, channel_id: &str) -> Result<Option<TempChannel>, AppError> {
        entity::prelude::TempChannel::find_by_id(channel_id.to_string())
            .one(self.db)
            .await?
            .map(TempChannel::from_entity)
            .transpose()
    }

    /// Lists the channels currently spawned from one creator.
    ///
    /// Used to find the next free `{number}` for new channel names.
    pub async fn get_for_creator(&self, creator_id: i32) -> Result<Vec<TempChannel>, AppError> {
        entity::prelude::TempChannel::find()
            .filter(entity::temp_channel::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::temp_channel::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(TempChannel::from_entity)
            .collect()
    }

    pub async fn create(
        &self,
        guild_id: u64,
        param: CreateTempChannelParam,
    ) -> Result<TempChannel, AppError> {
        let entity = entity::temp_channel::ActiveModel {
            channel_id: ActiveValue::Set(param.channel_id),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            owner_id: ActiveValue::Set(param.owner_id),
            creator_id: ActiveValue::Set(param.creator_id),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        TempChannel::from_entity(entity)
    }

    /// Removes the record of a temporary channel, returning whether it existed.
    pub async fn delete(&self, guild_id: u64, channel_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::TempChannel::delete_many()
            .filter(entity::temp_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::temp_channel::Column::ChannelId.eq(channel_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Repository for "join to create" channel configurations.
pub struct TempCreatorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TempCreatorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<TempCreator>, AppError> {
        entity::prelude::TempCreator::find()
            .filter(entity::temp_creator::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::temp_creator::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(TempCreator::from_entity)
            .collect()
    }

    pub async fn find(&self, guild_id: u64, id: i32) -> Result<Option<TempCreator>, AppError> {
        entity::prelude::TempCreator::find_by_id(id)
            .filter(entity::temp_creator::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(TempCreator::from_entity)
            .transpose()
    }

    /// Finds a creator by the voice channel users join to spawn their channel.
    pub async fn find_by_channel(
        &self,
        guild_id: u64,
        channel_id: &str,
    ) -> Result<Option<TempCreator>, AppError> {
        entity::prelude::TempCreator::find()
            .filter(entity::temp_creator::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::temp_creator::Column::ChannelId.eq(channel_id))
            .one(self.db)
            .await?
            .map(TempCreator::from_entity)
            .transpose()
    }

    pub async fn create(
        &self,
        guild_id: u64,
        param: CreateTempCreatorParam,
    ) -> Result<TempCreator, AppError> {
        let entity = entity::temp_creator::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id),
            category_id: ActiveValue::Set(param.category_id),
            name_template: ActiveValue::Set(param.name_template),
            numbering_type: ActiveValue::Set(param.numbering_type),
            position: ActiveValue::Set(param.position),
            default_limit: ActiveValue::Set(param.default_limit),
            default_bitrate: ActiveValue::Set(param.default_bitrate),
            allow_rename: ActiveValue::Set(param.allow_rename),
            allow_limit: ActiveValue::Set(param.allow_limit),
            allow_lock: ActiveValue::Set(param.allow_lock),
            allow_hide: ActiveValue::Set(param.allow_hide),
            allow_kick: ActiveValue::Set(param.allow_kick),
            allow_permit: ActiveValue::Set(param.allow_permit),
            allow_bitrate: ActiveValue::Set(param.allow_bitrate),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TempCreator::from_entity(entity)
    }

    /// Applies the fields present in `param` to a creator of the guild.
    ///
    /// # Returns
    /// - `Ok(Some(TempCreator))` - The updated creator
    /// - `Ok(None)` - No creator with that id in the guild
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        guild_id: u64,
        id: i32,
        param: UpdateTempCreatorParam,
    ) -> Result<Option<TempCreator>, AppError> {
        let Some(existing) = entity::prelude::TempCreator::find_by_id(id)
            .filter(entity::temp_creator::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(channel_id) = param.channel_id {
            active.channel_id = ActiveValue::Set(channel_id);
        }
        if let Some(category_id) = param.category_id {
            // Empty string clears the category
            active.category_id =
                ActiveValue::Set(Some(category_id).filter(|value| !value.is_empty()));
        }
        if let Some(name_template) = param.name_template {
            active.name_template = ActiveValue::Set(name_template);
        }
        if let Some(numbering_type) = param.numbering_type {
            active.numbering_type = ActiveValue::Set(numbering_type);
        }
        if let Some(position) = param.position {
            active.position = ActiveValue::Set(position);
        }
        if let Some(default_limit) = param.default_limit {
            active.default_limit = ActiveValue::Set(default_limit);
        }
        if let Some(default_bitrate) = param.default_bitrate {
            active.default_bitrate = ActiveValue::Set(default_bitrate);
        }
        if let Some(value) = param.allow_rename {
            active.allow_rename = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_limit {
            active.allow_limit = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_lock {
            active.allow_lock = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_hide {
            active.allow_hide = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_kick {
            active.allow_kick = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_permit {
            active.allow_permit = ActiveValue::Set(value);
        }
        if let Some(value) = param.allow_bitrate {
            active.allow_bitrate = ActiveValue::Set(value);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(TempCreator::from_entity(updated)?))
    }

    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::TempCreator::delete_many()
            .filter(entity::temp_creator::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::temp_creator::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
