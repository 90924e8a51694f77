use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, Mentionable, Member, RoleId, User};

use crate::server::{
    bot::{i18n, util::snowflake},
    error::AppError,
    service::guild::GuildService,
    util::template::render,
};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Grants the configured auto roles and posts the welcome message.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    new_member: Member,
) -> Result<(), AppError> {
    let guild_id = new_member.guild_id;
    let settings = GuildService::new(db).get(guild_id.get()).await?.settings;

    for role_id in settings.auto_roles.iter().filter_map(|id| snowflake(id)) {
        // A single missing or too high role must not block the others
        if let Err(e) = new_member.add_role(&ctx.http, RoleId::new(role_id)).await {
            tracing::warn!(
                "Failed to grant auto role {} in guild {}: {}",
                role_id,
                guild_id,
                e
            );
        }
    }

    if !settings.welcome_enabled {
        return Ok(());
    }
    let Some(channel_id) = snowflake(&settings.welcome_channel) else {
        return Ok(());
    };

    let text = greeting(
        &settings.welcome_message,
        &settings.language,
        "welcome_default",
        &new_member.mention().to_string(),
        &guild_id.name(&ctx.cache).unwrap_or_default(),
    );

    ChannelId::new(channel_id).say(&ctx.http, text).await?;

    Ok(())
}

/// Handles the guild_member_removal event when a member leaves a guild
///
/// Goodbye messages go to the welcome channel.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
) -> Result<(), AppError> {
    let settings = GuildService::new(db).get(guild_id.get()).await?.settings;

    if !settings.goodbye_enabled {
        return Ok(());
    }
    let Some(channel_id) = snowflake(&settings.welcome_channel) else {
        return Ok(());
    };

    let text = greeting(
        &settings.goodbye_message,
        &settings.language,
        "goodbye_default",
        &user.name,
        &guild_id.name(&ctx.cache).unwrap_or_default(),
    );

    ChannelId::new(channel_id).say(&ctx.http, text).await?;

    Ok(())
}

/// Renders a welcome or goodbye message, using the language default when the
/// configured message is empty.
fn greeting(message: &str, language: &str, default_key: &str, user: &str, server: &str) -> String {
    let template = if message.trim().is_empty() {
        i18n::text(language, default_key)
    } else {
        message
    };

    render(template, &[("user", user), ("server", server)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_user_and_server() {
        let text = greeting("Hi {user}, welcome to {server}!", "en", "welcome_default", "<@1>", "Guild");
        assert_eq!(text, "Hi <@1>, welcome to Guild!");
    }

    #[test]
    fn empty_message_uses_language_default() {
        assert_eq!(
            greeting("  ", "en", "goodbye_default", "Ann", "Guild"),
            "Goodbye, Ann! 👋"
        );
        assert_eq!(
            greeting("", "de", "welcome_default", "Ann", "Guild"),
            "Willkommen auf dem Server, Ann! 🎉"
        );
    }
}
