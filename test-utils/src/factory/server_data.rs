//! Factories for cached Discord roles, channels & emojis.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cached guild role with the given position.
pub async fn create_guild_role(
    db: &DatabaseConnection,
    guild_id: &str,
    role_id: &str,
    name: &str,
    position: i16,
) -> Result<entity::discord_guild_role::Model, DbErr> {
    entity::discord_guild_role::ActiveModel {
        role_id: ActiveValue::Set(role_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        name: ActiveValue::Set(name.to_string()),
        color: ActiveValue::Set("#99AAB5".to_string()),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Creates a cached guild channel of the given kind (`text`, `voice` or `category`).
pub async fn create_guild_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: &str,
    name: &str,
    kind: &str,
    position: i32,
) -> Result<entity::discord_guild_channel::Model, DbErr> {
    entity::discord_guild_channel::ActiveModel {
        channel_id: ActiveValue::Set(channel_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        name: ActiveValue::Set(name.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Creates a cached custom emoji.
pub async fn create_guild_emoji(
    db: &DatabaseConnection,
    guild_id: &str,
    emoji_id: &str,
    name: &str,
) -> Result<entity::discord_guild_emoji::Model, DbErr> {
    entity::discord_guild_emoji::ActiveModel {
        emoji_id: ActiveValue::Set(emoji_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        name: ActiveValue::Set(name.to_string()),
        animated: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}
