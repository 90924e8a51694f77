use sea_orm::DatabaseConnection;
use serenity::all::Guild;

use crate::server::{
    bot::log::BotLog,
    error::AppError,
    model::server_data::{
        SyncChannelParam, SyncEmojiParam, SyncRoleParam, SyncServerDataParam,
    },
    service::{guild::GuildService, server_data::ServerDataService},
};

/// Handles the guild_create event when a guild becomes available
///
/// Makes sure the guild has a config and replaces its cached roles, channels & emojis
/// with the ones delivered by the event.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    log: &BotLog,
    guild: Guild,
) -> Result<(), AppError> {
    let guild_id = guild.id.get();

    GuildService::new(db).get(guild_id).await?;

    let param = sync_param(&guild);
    let counts = (param.roles.len(), param.channels.len(), param.emojis.len());

    ServerDataService::new(db).store(guild_id, param).await?;

    log.info(format!(
        "Synced guild {} ({}): {} roles, {} channels, {} emojis",
        guild.name, guild_id, counts.0, counts.1, counts.2
    ));

    Ok(())
}

fn sync_param(guild: &Guild) -> SyncServerDataParam {
    SyncServerDataParam {
        roles: guild.roles.values().map(SyncRoleParam::from_role).collect(),
        channels: guild
            .channels
            .values()
            .filter_map(SyncChannelParam::from_channel)
            .collect(),
        emojis: guild.emojis.values().map(SyncEmojiParam::from_emoji).collect(),
    }
}
