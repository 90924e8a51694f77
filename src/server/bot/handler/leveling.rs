use serenity::all::{ChannelId, Context, GuildId, Mentionable, RoleId, UserId};

use crate::server::{
    bot::{i18n, log::BotLog, util::snowflake},
    error::AppError,
    service::leveling::LevelUp,
};

/// Grants the roles of a level-up and announces it.
///
/// The announcement goes to the configured level-up channel, or to `fallback_channel`
/// when none is set. Voice level-ups pass no fallback and stay silent without a
/// configured channel.
pub async fn apply_level_up(
    ctx: &Context,
    log: &BotLog,
    guild_id: GuildId,
    user_id: UserId,
    fallback_channel: Option<ChannelId>,
    level_up: LevelUp,
) -> Result<(), AppError> {
    for role_id in level_up.role_ids.iter().filter_map(|id| snowflake(id)) {
        if let Err(e) = ctx
            .http
            .add_member_role(guild_id, user_id, RoleId::new(role_id), Some("Level reward"))
            .await
        {
            log.error(format!(
                "Failed to grant level role {} to {} in guild {}: {}",
                role_id, user_id, guild_id, e
            ));
        }
    }

    let channel = level_up
        .announce_channel
        .as_deref()
        .and_then(snowflake)
        .map(ChannelId::new)
        .or(fallback_channel);

    let Some(channel) = channel else {
        return Ok(());
    };

    let text = i18n::t(
        &level_up.language,
        "level_up",
        &[
            ("user", &user_id.mention().to_string()),
            ("level", &level_up.level.to_string()),
        ],
    );
    channel.say(&ctx.http, text).await?;

    Ok(())
}
