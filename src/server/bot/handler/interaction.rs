//! Slash command & button interactions.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, ComponentInteraction, Context, CreateChannel,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditMember, GuildId, Interaction, Mentionable, PermissionOverwrite, PermissionOverwriteType,
    Permissions, RoleId, Timestamp, User,
};

use crate::server::{
    bot::{
        command::{self, parse_reaction_role_button_id, parse_ticket_open_id},
        i18n,
        log::BotLog,
        util::{embed_colour, snowflake},
    },
    error::AppError,
    model::{moderation::ModerationActionParam, ticket::CreateTicketParam},
    service::{
        game::{CoinflipOutcome, GameDenied, GameService},
        guild::GuildService,
        leveling::LevelingService,
        moderation::{ModerationService, ThresholdAction},
        reaction_role::ReactionRoleService,
        ticket::TicketService,
    },
    util::level::{xp_for_level, xp_to_next_level},
};

const MUTE_MINUTES: i64 = 10;
const LEADERBOARD_SIZE: u64 = 10;

pub async fn handle_interaction(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: Context,
    interaction: Interaction,
) -> Result<(), AppError> {
    match interaction {
        Interaction::Command(command) => handle_command(db, log, &ctx, &command).await,
        Interaction::Component(component) => handle_component(db, log, &ctx, &component).await,
        _ => Ok(()),
    }
}

async fn handle_command(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return Ok(());
    };
    let settings = GuildService::new(db).get(guild_id.get()).await?.settings;
    let language = settings.language.as_str();

    let response = match command.data.name.as_str() {
        command::WARN => {
            let Some(target) = user_option(command, "user") else {
                return reply(ctx, command, i18n::text(language, "user_not_found"), true).await;
            };
            let reason = command
                .data
                .options
                .iter()
                .find(|option| option.name == "reason")
                .and_then(|option| option.value.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| i18n::text(language, "no_reason").to_string());

            warn(db, log, ctx, guild_id, command, &target, reason, language).await?
        }
        command::WARNINGS => {
            let Some(target) = user_option(command, "user") else {
                return reply(ctx, command, i18n::text(language, "user_not_found"), true).await;
            };
            warnings(db, guild_id, &target, language).await?
        }
        command::RANK => {
            let target = user_option(command, "user").unwrap_or_else(|| command.user.clone());
            rank(db, guild_id, &target, language, &settings.bot_embed_color).await?
        }
        command::LEADERBOARD => {
            leaderboard(db, guild_id, language, &settings.bot_embed_color).await?
        }
        command::COINFLIP => {
            let outcome = GameService::new(db)
                .play_coinflip(
                    guild_id.get(),
                    &command.channel_id.get().to_string(),
                    &command.user.id.get().to_string(),
                    rand::random::<bool>(),
                )
                .await?;
            coinflip(outcome, &command.user, language)
        }
        _ => return Ok(()),
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Resolves a user option of a slash command.
fn user_option(command: &CommandInteraction, name: &str) -> Option<User> {
    let user_id = command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_user_id())?;

    command.data.resolved.users.get(&user_id).cloned()
}

async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
    ephemeral: bool,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(ephemeral),
            ),
        )
        .await?;

    Ok(())
}

/// Warns `target`, notifies them by DM and applies the threshold action.
#[allow(clippy::too_many_arguments)]
async fn warn(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    guild_id: GuildId,
    command: &CommandInteraction,
    target: &User,
    reason: String,
    language: &str,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let service = ModerationService::new(db);
    let param = ModerationActionParam {
        user_id: target.id.get().to_string(),
        moderator_id: command.user.id.get().to_string(),
        reason: reason.clone(),
    };
    let outcome = service.warn(guild_id.get(), param).await?;

    let server = guild_id
        .name(&ctx.cache)
        .unwrap_or_else(|| guild_id.get().to_string());
    notify(
        ctx,
        target,
        i18n::t(language, "warn_dm", &[("server", &server), ("reason", &reason)]),
    )
    .await;

    if let Some(action) = outcome.action {
        let action_reason = i18n::t(
            language,
            "threshold_reached",
            &[("threshold", &outcome.threshold.to_string())],
        );
        apply_threshold_action(ctx, guild_id, target, action, &action_reason, &server, language)
            .await?;

        let moderator_id = ctx.cache.current_user().id.get().to_string();
        service
            .log_action(
                guild_id.get(),
                action.as_str(),
                &ModerationActionParam {
                    user_id: target.id.get().to_string(),
                    moderator_id,
                    reason: action_reason,
                },
            )
            .await?;

        log.info(format!(
            "Applied {} to {} in guild {} after {} warnings",
            action.as_str(),
            target.id,
            guild_id,
            outcome.count
        ));
    }

    let content = i18n::t(
        language,
        "warned",
        &[
            ("user", &target.mention().to_string()),
            ("reason", &reason),
            ("count", &outcome.count.to_string()),
        ],
    );

    Ok(CreateInteractionResponseMessage::new().content(content))
}

async fn apply_threshold_action(
    ctx: &Context,
    guild_id: GuildId,
    target: &User,
    action: ThresholdAction,
    reason: &str,
    server: &str,
    language: &str,
) -> Result<(), AppError> {
    // The DM has to go out while the member still shares the server
    match action {
        ThresholdAction::Mute => {
            let until = Timestamp::from(Utc::now() + Duration::minutes(MUTE_MINUTES));
            guild_id
                .edit_member(
                    &ctx.http,
                    target.id,
                    EditMember::new().disable_communication_until_datetime(until),
                )
                .await?;
            notify(
                ctx,
                target,
                i18n::t(
                    language,
                    "mute_dm",
                    &[
                        ("server", server),
                        ("duration", &format!("{} min", MUTE_MINUTES)),
                        ("reason", reason),
                    ],
                ),
            )
            .await;
        }
        ThresholdAction::Kick => {
            notify(
                ctx,
                target,
                i18n::t(language, "kick_dm", &[("server", server), ("reason", reason)]),
            )
            .await;
            guild_id
                .kick_with_reason(&ctx.http, target.id, reason)
                .await?;
        }
        ThresholdAction::Ban => {
            notify(
                ctx,
                target,
                i18n::t(language, "ban_dm", &[("server", server), ("reason", reason)]),
            )
            .await;
            guild_id
                .ban_with_reason(&ctx.http, target.id, 0, reason)
                .await?;
        }
    }

    Ok(())
}

/// Sends a DM, ignoring members who block DMs.
async fn notify(ctx: &Context, user: &User, content: String) {
    if let Err(e) = user
        .direct_message(&ctx.http, CreateMessage::new().content(content))
        .await
    {
        tracing::debug!("Could not DM {}: {}", user.id, e);
    }
}

async fn warnings(
    db: &DatabaseConnection,
    guild_id: GuildId,
    target: &User,
    language: &str,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let warnings = ModerationService::new(db)
        .warnings(guild_id.get(), Some(&target.id.get().to_string()))
        .await?;

    if warnings.is_empty() {
        let content = i18n::t(
            language,
            "no_warnings",
            &[("user", &target.mention().to_string())],
        );
        return Ok(CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true));
    }

    let count = warnings.len();
    let fields = warnings.into_iter().enumerate().take(25).map(|(i, warning)| {
        (
            i18n::t(
                language,
                "warning_entry",
                &[("number", &(count - i).to_string())],
            ),
            i18n::t(
                language,
                "warning_value",
                &[
                    ("reason", &warning.reason),
                    ("date", &warning.created_at.format("%d.%m.%Y %H:%M").to_string()),
                ],
            ),
            false,
        )
    });

    let embed = CreateEmbed::new()
        .title(i18n::t(
            language,
            "warnings_title",
            &[("user", &target.name)],
        ))
        .colour(0xFEE75C)
        .fields(fields);

    Ok(CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true))
}

async fn rank(
    db: &DatabaseConnection,
    guild_id: GuildId,
    target: &User,
    language: &str,
    colour: &str,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let service = LevelingService::new(db);
    let member = service
        .get_member(guild_id.get(), &target.id.get().to_string())
        .await?;
    let position = service.rank(guild_id.get(), &member).await?;

    let into_level = member.xp.saturating_sub(xp_for_level(member.level));
    let needed = xp_to_next_level(member.level);

    let embed = CreateEmbed::new()
        .title(i18n::t(language, "rank_title", &[("user", &target.name)]))
        .colour(embed_colour(colour))
        .thumbnail(target.face())
        .field("Rank", format!("#{}", position), true)
        .field("Level", member.level.to_string(), true)
        .field("XP", member.xp.to_string(), true)
        .field(i18n::text(language, "messages"), member.messages.to_string(), true)
        .field(
            i18n::text(language, "progress"),
            format!("{} / {}\n{}", into_level, needed, progress_bar(into_level, needed)),
            false,
        );

    Ok(CreateInteractionResponseMessage::new().embed(embed))
}

/// Renders `value / max` as a bar of ten blocks.
fn progress_bar(value: i64, max: i64) -> String {
    let filled = if max > 0 {
        (i128::from(value.clamp(0, max)) * 10 / i128::from(max)) as usize
    } else {
        0
    };

    format!("{}{}", "▰".repeat(filled), "▱".repeat(10 - filled))
}

async fn leaderboard(
    db: &DatabaseConnection,
    guild_id: GuildId,
    language: &str,
    colour: &str,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let members = LevelingService::new(db)
        .leaderboard(guild_id.get(), LEADERBOARD_SIZE)
        .await?;

    let description = if members.is_empty() {
        i18n::text(language, "leaderboard_empty").to_string()
    } else {
        members
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let medal = match i {
                    0 => "🥇".to_string(),
                    1 => "🥈".to_string(),
                    2 => "🥉".to_string(),
                    _ => format!("**{}.**", i + 1),
                };
                format!(
                    "{} <@{}> · Level {} · {} XP",
                    medal, member.user_id, member.level, member.xp
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let embed = CreateEmbed::new()
        .title(i18n::text(language, "leaderboard_title"))
        .colour(embed_colour(colour))
        .description(description);

    Ok(CreateInteractionResponseMessage::new().embed(embed))
}

fn coinflip(outcome: CoinflipOutcome, user: &User, language: &str) -> CreateInteractionResponseMessage {
    let mention = user.mention().to_string();

    match outcome {
        CoinflipOutcome::Played { heads, .. } => {
            let key = if heads { "coinflip_heads" } else { "coinflip_tails" };
            CreateInteractionResponseMessage::new().content(i18n::t(
                language,
                key,
                &[("user", &mention)],
            ))
        }
        CoinflipOutcome::Denied(denied) => {
            let content = match denied {
                GameDenied::Disabled => i18n::text(language, "games_disabled").to_string(),
                GameDenied::WrongChannel(channel) => {
                    i18n::t(language, "games_wrong_channel", &[("channel", &channel)])
                }
                GameDenied::TooManyActive => i18n::text(language, "games_too_many").to_string(),
                GameDenied::Cooldown(seconds) => i18n::t(
                    language,
                    "games_cooldown",
                    &[("seconds", &seconds.to_string())],
                ),
            };
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true)
        }
    }
}

async fn handle_component(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = component.guild_id else {
        return Ok(());
    };

    if let Some(reaction_role_id) = parse_reaction_role_button_id(&component.data.custom_id) {
        return toggle_reaction_role(db, log, ctx, component, guild_id, reaction_role_id).await;
    }
    let Some(panel_id) = parse_ticket_open_id(&component.data.custom_id) else {
        return Ok(());
    };

    let channel_id = open_ticket(db, ctx, guild_id, panel_id, &component.user).await?;
    let language = GuildService::new(db).get(guild_id.get()).await?.settings.language;

    log.info(format!(
        "Opened ticket channel {} for {} in guild {}",
        channel_id, component.user.id, guild_id
    ));

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(i18n::t(
                        &language,
                        "ticket_created",
                        &[("channel", &channel_id.mention().to_string())],
                    ))
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Gives the clicking member the button's role, or takes it away when they have it.
async fn toggle_reaction_role(
    db: &DatabaseConnection,
    log: &BotLog,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: GuildId,
    reaction_role_id: i32,
) -> Result<(), AppError> {
    let Some(reaction_role) = ReactionRoleService::new(db)
        .role_for_button(guild_id.get(), reaction_role_id)
        .await?
    else {
        return Ok(());
    };
    let Some(role_id) = snowflake(&reaction_role.role_id).map(RoleId::new) else {
        return Ok(());
    };
    let language = GuildService::new(db).get(guild_id.get()).await?.settings.language;

    let user_id = component.user.id;
    let has_role = component
        .member
        .as_ref()
        .is_some_and(|member| member.roles.contains(&role_id));

    let key = if has_role {
        ctx.http
            .remove_member_role(guild_id, user_id, role_id, Some("Reaction role"))
            .await?;
        "reaction_role_removed"
    } else {
        ctx.http
            .add_member_role(guild_id, user_id, role_id, Some("Reaction role"))
            .await?;
        "reaction_role_added"
    };
    log.info(format!(
        "Toggled role {} for {} in guild {}",
        role_id, user_id, guild_id
    ));

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(i18n::t(
                        &language,
                        key,
                        &[("role", &role_id.mention().to_string())],
                    ))
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Creates the private ticket channel for `user` and records the ticket.
async fn open_ticket(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: GuildId,
    panel_id: i32,
    user: &User,
) -> Result<ChannelId, AppError> {
    let service = TicketService::new(db);
    let (panel, number, channel_name) = service
        .reserve_ticket(guild_id.get(), panel_id, &user.name)
        .await?;

    let member_access = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::ATTACH_FILES;

    let mut overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            // @everyone shares the guild id
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: member_access,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user.id),
        },
    ];
    overwrites.extend(
        panel
            .support_roles
            .iter()
            .filter_map(|role| snowflake(role))
            .map(|role| PermissionOverwrite {
                allow: member_access,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(RoleId::new(role)),
            }),
    );

    let mut builder = CreateChannel::new(channel_name)
        .kind(ChannelType::Text)
        .permissions(overwrites);
    if let Some(category) = panel.ticket_category.as_deref().and_then(snowflake) {
        builder = builder.category(ChannelId::new(category));
    }

    let channel = guild_id.create_channel(&ctx.http, builder).await?;

    service
        .record_ticket(
            guild_id.get(),
            CreateTicketParam {
                panel_id: Some(panel.id),
                channel_id: channel.id.get().to_string(),
                user_id: user.id.get().to_string(),
                number,
            },
        )
        .await?;

    let pings: Vec<String> = panel
        .ping_roles
        .iter()
        .filter_map(|role| snowflake(role))
        .map(|role| RoleId::new(role).mention().to_string())
        .collect();
    let language = GuildService::new(db).get(guild_id.get()).await?.settings.language;
    let welcome = i18n::t(
        &language,
        "ticket_welcome",
        &[("user", &user.mention().to_string())],
    );
    let content = if pings.is_empty() {
        welcome
    } else {
        format!("{}\n{}", pings.join(" "), welcome)
    };

    channel
        .id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(
                CreateEmbed::new()
                    .title(format!("{} #{:04}", panel.title, number))
                    .colour(embed_colour(&panel.color)),
            )
            .content(content),
        )
        .await?;

    Ok(channel.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_scales_to_ten_blocks() {
        assert_eq!(progress_bar(0, 100), "▱▱▱▱▱▱▱▱▱▱");
        assert_eq!(progress_bar(55, 110), "▰▰▰▰▰▱▱▱▱▱");
        assert_eq!(progress_bar(500, 100), "▰▰▰▰▰▰▰▰▰▰");
        assert_eq!(progress_bar(5, 0), "▱▱▱▱▱▱▱▱▱▱");
        assert_eq!(progress_bar(i64::MAX, i64::MAX), "▰▰▰▰▰▰▰▰▰▰");
    }
}
