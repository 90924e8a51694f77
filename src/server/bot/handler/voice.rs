use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, ChannelType, Context, CreateChannel, GuildId, UserId, VoiceState,
};

use crate::server::{
    bot::{handler::leveling::apply_level_up, log::BotLog, util::snowflake},
    error::AppError,
    model::temp_channel::{CreateTempChannelParam, TempCreator},
    service::{leveling::LevelingService, temp_channel::TempChannelService},
};

/// Handles voice joins, leaves & moves
///
/// Leaving a channel closes the member's voice session and cleans up an emptied temp
/// channel. Joining a creator channel spawns a temp channel; joining any other
/// channel opens a voice session.
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) -> Result<(), AppError> {
    let Some(guild_id) = new.guild_id else {
        return Ok(());
    };
    if new.member.as_ref().is_some_and(|member| member.user.bot) {
        return Ok(());
    }

    let user_id = new.user_id;
    let old_channel = old.and_then(|state| state.channel_id);
    let new_channel = new.channel_id;

    // Mute & deafen toggles keep the channel
    if old_channel == new_channel {
        return Ok(());
    }

    if let Some(left) = old_channel {
        if let Some(level_up) = LevelingService::new(db)
            .end_voice_session(guild_id.get(), &user_id.get().to_string(), Utc::now())
            .await?
        {
            apply_level_up(&ctx, log, guild_id, user_id, None, level_up).await?;
        }

        cleanup_temp_channel(db, log, &ctx, guild_id, left).await?;
    }

    let Some(joined) = new_channel else {
        return Ok(());
    };

    if let Some(creator) = TempChannelService::new(db)
        .creator_for_channel(guild_id.get(), &joined.get().to_string())
        .await?
    {
        let display_name = new
            .member
            .as_ref()
            .map(|member| member.display_name().to_string())
            .unwrap_or_else(|| user_id.get().to_string());

        // The move triggers another voice update which opens the session
        spawn_temp_channel(db, log, &ctx, guild_id, user_id, joined, &creator, &display_name)
            .await?;
        return Ok(());
    }

    let members = members_in_channel(&ctx, guild_id, joined);
    LevelingService::new(db)
        .start_voice_session(
            guild_id.get(),
            &user_id.get().to_string(),
            &joined.get().to_string(),
            members,
            Utc::now(),
        )
        .await?;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn spawn_temp_channel(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
    creator_channel: ChannelId,
    creator: &TempCreator,
    display_name: &str,
) -> Result<(), AppError> {
    let service = TempChannelService::new(db);
    let name = service.next_channel_name(creator, display_name).await?;

    let mut builder = CreateChannel::new(name.clone())
        .kind(ChannelType::Voice)
        .bitrate(u32::try_from(creator.default_bitrate).unwrap_or(64000))
        .user_limit(u32::try_from(creator.default_limit).unwrap_or(0));

    let category = creator
        .category_id
        .as_deref()
        .and_then(snowflake)
        .map(ChannelId::new)
        .or_else(|| parent_of(ctx, creator_channel));
    if let Some(category) = category {
        builder = builder.category(category);
    }
    if creator.position == "top" {
        builder = builder.position(0);
    }

    let channel = guild_id.create_channel(&ctx.http, builder).await?;

    service
        .register_channel(
            guild_id.get(),
            CreateTempChannelParam {
                channel_id: channel.id.get().to_string(),
                owner_id: user_id.get().to_string(),
                creator_id: Some(creator.id),
                name,
            },
        )
        .await?;

    guild_id.move_member(&ctx.http, user_id, channel.id).await?;

    log.info(format!(
        "Created temp channel {} for {} in guild {}",
        channel.name, user_id, guild_id
    ));

    Ok(())
}

/// Deletes `channel_id` when it is a temp channel nobody is connected to anymore.
async fn cleanup_temp_channel(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<(), AppError> {
    let service = TempChannelService::new(db);
    let key = channel_id.get().to_string();

    if service.find_channel(&key).await?.is_none() {
        return Ok(());
    }
    if members_in_channel(ctx, guild_id, channel_id) > 0 {
        return Ok(());
    }

    if let Err(e) = channel_id.delete(&ctx.http).await {
        // Already removed on Discord, drop the record anyway
        tracing::warn!("Failed to delete temp channel {}: {}", channel_id, e);
    }
    service.delete_channel(guild_id.get(), &key).await?;

    log.info(format!(
        "Deleted empty temp channel {} in guild {}",
        channel_id, guild_id
    ));

    Ok(())
}

/// Counts the members connected to a voice channel according to the cache.
fn members_in_channel(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> usize {
    ctx.cache
        .guild(guild_id)
        .map(|guild| {
            guild
                .voice_states
                .values()
                .filter(|state| state.channel_id == Some(channel_id))
                .count()
        })
        .unwrap_or(0)
}

fn parent_of(ctx: &Context, channel_id: ChannelId) -> Option<ChannelId> {
    ctx.cache
        .channel(channel_id)
        .and_then(|channel| channel.parent_id)
}
