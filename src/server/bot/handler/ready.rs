//! Ready event handler for bot initialization.
//!
//! Registers the global slash commands and applies the configured presence once the
//! gateway handshake completes.

use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Command, Context, OnlineStatus, Ready};

use crate::{
    model::guild::GuildSettings,
    server::{
        bot::{command, log::BotLog},
        error::AppError,
        service::guild::GuildService,
    },
};

/// Handles the ready event when the bot connects to Discord.
///
/// Presence is global to the bot while appearance settings are stored per guild, the
/// first guild that sets an activity text decides.
pub async fn handle_ready(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: Context,
    ready: Ready,
) -> Result<(), AppError> {
    log.info(format!("{} is connected to Discord", ready.user.name));

    let commands = Command::set_global_commands(&ctx.http, command::definitions()).await?;
    log.info(format!("Registered {} slash commands", commands.len()));

    let configs = GuildService::new(db).get_all().await?;
    if let Some(settings) = configs
        .iter()
        .map(|config| &config.settings)
        .find(|settings| !settings.bot_activity_text.trim().is_empty())
    {
        ctx.set_presence(Some(activity(settings)), online_status(&settings.bot_status));
    }

    Ok(())
}

fn activity(settings: &GuildSettings) -> ActivityData {
    let text = settings.bot_activity_text.trim();

    match settings.bot_activity_type.as_str() {
        "watching" => ActivityData::watching(text),
        "listening" => ActivityData::listening(text),
        "competing" => ActivityData::competing(text),
        _ => ActivityData::playing(text),
    }
}

fn online_status(value: &str) -> OnlineStatus {
    match value {
        "idle" => OnlineStatus::Idle,
        "dnd" => OnlineStatus::DoNotDisturb,
        "invisible" => OnlineStatus::Invisible,
        _ => OnlineStatus::Online,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::ActivityType;

    #[test]
    fn maps_activity_settings() {
        let settings = GuildSettings {
            bot_activity_type: "watching".to_string(),
            bot_activity_text: " the server ".to_string(),
            ..Default::default()
        };

        let activity = activity(&settings);

        assert_eq!(activity.kind, ActivityType::Watching);
        assert_eq!(activity.name, "the server");
    }

    #[test]
    fn unknown_status_is_online() {
        assert_eq!(online_status("dnd"), OnlineStatus::DoNotDisturb);
        assert_eq!(online_status("sleeping"), OnlineStatus::Online);
    }
}
