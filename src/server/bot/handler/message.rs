use chrono::Utc;
use serenity::all::{Context, Message};

use crate::server::{
    bot::{ai, handler::Handler, handler::leveling::apply_level_up, i18n},
    error::AppError,
    service::{
        bot_setting::BotSettingService, custom_command::CustomCommandService,
        guild::GuildService, leveling::LevelingService,
    },
};

/// Handle message creation in a channel
///
/// Custom commands take precedence, then AI chat in the configured AI channel. Only
/// messages handled by neither earn XP.
pub async fn handle_message(
    handler: &Handler,
    ctx: Context,
    message: Message,
) -> Result<(), AppError> {
    if message.author.bot {
        return Ok(());
    }
    // Only guild channels, not DMs
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let db = &handler.db;
    let settings = GuildService::new(db).get(guild_id.get()).await?.settings;
    let channel_id = message.channel_id.get().to_string();
    let user_id = message.author.id.get().to_string();

    if let Some(command) = CustomCommandService::new(db)
        .trigger(guild_id.get(), &settings.prefix, &message.content)
        .await?
    {
        message.channel_id.say(&ctx.http, &command.response).await?;
        return Ok(());
    }

    if settings.ai_enabled && !settings.ai_channel.is_empty() && settings.ai_channel == channel_id
    {
        let typing = message.channel_id.start_typing(&ctx.http);

        let reply = match BotSettingService::new(db).openai_api_key().await? {
            None => i18n::text(&settings.language, "ai_not_configured").to_string(),
            Some(api_key) => match ai::complete(
                &handler.http_client,
                &api_key,
                &settings.ai_system_prompt,
                &message.content,
            )
            .await
            {
                Ok(reply) => reply,
                Err(e) => {
                    handler
                        .log
                        .error(format!("AI completion failed in guild {}: {}", guild_id, e));
                    i18n::t(&settings.language, "ai_error", &[("error", &e.to_string())])
                }
            },
        };

        typing.stop();
        message.reply(&ctx.http, reply).await?;
        return Ok(());
    }

    if let Some(level_up) = LevelingService::new(db)
        .award_message_xp(guild_id.get(), &user_id, &channel_id, Utc::now())
        .await?
    {
        apply_level_up(
            &ctx,
            &handler.log,
            guild_id,
            message.author.id,
            Some(message.channel_id),
            level_up,
        )
        .await?;
    }

    Ok(())
}
