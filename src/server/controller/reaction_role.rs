use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, Http,
    Mentionable, RoleId,
};

use crate::{
    model::{
        api::ErrorDto,
        reaction_role::{
            CreateReactionRoleDto, CreatedReactionRolesDto, ReactionRoleDto,
            ReactionRoleListDto, UpdateReactionRoleDto,
        },
    },
    server::{
        bot::{
            command::reaction_role_button_id,
            handler::reaction::stored_reaction_type,
            util::{embed_colour, snowflake},
        },
        error::AppError,
        middleware::auth::AuthGuard,
        model::reaction_role::ReactionRole,
        service::reaction_role::ReactionRoleService,
        state::AppState,
    },
};

/// Discord allows five buttons per action row.
const BUTTONS_PER_ROW: usize = 5;

/// Tag for grouping reaction role endpoints in OpenAPI documentation
pub static REACTION_ROLE_TAG: &str = "reaction_role";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/reaction-roles",
    tag = REACTION_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Reaction roles of the guild", body = ReactionRoleListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reaction_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reaction_roles = ReactionRoleService::new(&state.db)
        .get_all(guild_id)
        .await?
        .into_iter()
        .map(|role| role.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ReactionRoleListDto { reaction_roles })))
}

/// Create a reaction role panel.
///
/// One record is stored per offered role. All of them share the panel's title,
/// description, channel and color and wait for a message id.
///
/// # Returns
/// - `201 Created` - Number of created records and the records themselves
/// - `400 Bad Request` - No channel, no role or more than 10 roles
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/reaction-roles",
    tag = REACTION_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateReactionRoleDto,
    responses(
        (status = 201, description = "Reaction roles created", body = CreatedReactionRolesDto),
        (status = 400, description = "Invalid reaction role data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reaction_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateReactionRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reaction_roles: Vec<_> = ReactionRoleService::new(&state.db)
        .create(guild_id, payload)
        .await?
        .into_iter()
        .map(|role| role.into_dto())
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(CreatedReactionRolesDto {
            created: reaction_roles.len(),
            reaction_roles,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/reaction-roles/{reaction_role_id}",
    tag = REACTION_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("reaction_role_id" = i32, Path, description = "Reaction role ID")
    ),
    request_body = UpdateReactionRoleDto,
    responses(
        (status = 200, description = "Updated reaction role", body = ReactionRoleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reaction role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reaction_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, reaction_role_id)): Path<(u64, i32)>,
    Json(payload): Json<UpdateReactionRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reaction_role = ReactionRoleService::new(&state.db)
        .update(guild_id, reaction_role_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(reaction_role.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/reaction-roles/{reaction_role_id}",
    tag = REACTION_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("reaction_role_id" = i32, Path, description = "Reaction role ID")
    ),
    responses(
        (status = 204, description = "Reaction role deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reaction role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reaction_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, reaction_role_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    ReactionRoleService::new(&state.db)
        .delete(guild_id, reaction_role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Post the panel a reaction role belongs to.
///
/// The embed lists every role of the panel. Reaction panels get one reaction per
/// emoji, button panels one button per role. All rows of the panel then store the
/// posted message id.
///
/// # Returns
/// - `200 OK` - All rows of the posted panel
/// - `400 Bad Request` - Bot not running or invalid channel
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such reaction role
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/reaction-roles/{reaction_role_id}/send",
    tag = REACTION_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("reaction_role_id" = i32, Path, description = "Any reaction role of the panel")
    ),
    responses(
        (status = 200, description = "Panel posted", body = ReactionRoleListDto),
        (status = 400, description = "Bot not running or invalid channel", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reaction role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_reaction_role_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, reaction_role_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service = ReactionRoleService::new(&state.db);
    let panel = service.get_panel(guild_id, reaction_role_id).await?;
    let http = state.bot.require_http().await?;

    let message_id = post_panel(&http, &panel).await?;
    service.mark_panel_sent(&panel, &message_id).await?;

    let reaction_roles = panel
        .into_iter()
        .map(|mut role| {
            role.message_id = message_id.clone();
            role.into_dto()
        })
        .collect();

    Ok((StatusCode::OK, Json(ReactionRoleListDto { reaction_roles })))
}

async fn post_panel(http: &Http, panel: &[ReactionRole]) -> Result<String, AppError> {
    let Some(first) = panel.first() else {
        return Err(AppError::NotFound("Reaction role not found".to_string()));
    };
    let channel_id = snowflake(&first.channel_id)
        .map(ChannelId::new)
        .ok_or_else(|| AppError::BadRequest("Invalid panel channel".to_string()))?;

    let embed = CreateEmbed::new()
        .title(&first.title)
        .description(panel_description(&first.description, panel))
        .colour(embed_colour(&first.color));

    let mut message = CreateMessage::new().embed(embed);
    if first.kind == "button" {
        let rows = panel
            .chunks(BUTTONS_PER_ROW)
            .map(|chunk| CreateActionRow::Buttons(chunk.iter().map(role_button).collect()))
            .collect();
        message = message.components(rows);
    }

    let posted = channel_id.send_message(http, message).await?;

    if first.kind == "reaction" {
        for role in panel {
            if let Some(emoji) = stored_reaction_type(&role.emoji) {
                posted.react(http, emoji).await?;
            }
        }
    }

    Ok(posted.id.get().to_string())
}

fn role_button(role: &ReactionRole) -> CreateButton {
    let label = if role.label.trim().is_empty() {
        "Role"
    } else {
        role.label.as_str()
    };
    let mut button = CreateButton::new(reaction_role_button_id(role.id))
        .label(label)
        .style(ButtonStyle::Secondary);
    if let Some(emoji) = stored_reaction_type(&role.emoji) {
        button = button.emoji(emoji);
    }

    button
}

/// Panel text followed by one `emoji role label` line per role.
fn panel_description(description: &str, panel: &[ReactionRole]) -> String {
    let lines: Vec<String> = panel
        .iter()
        .map(|role| {
            let mention = snowflake(&role.role_id)
                .map(|id| RoleId::new(id).mention().to_string())
                .unwrap_or_default();
            format!("{} {} {}", role.emoji, mention, role.label)
                .trim()
                .to_string()
        })
        .collect();

    if description.trim().is_empty() {
        lines.join("\n")
    } else {
        format!("{}\n\n{}", description.trim(), lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(id: i32, emoji: &str, role_id: &str, label: &str) -> ReactionRole {
        ReactionRole {
            id,
            guild_id: 1,
            channel_id: "10".to_string(),
            message_id: "pending".to_string(),
            title: "Pick roles".to_string(),
            description: String::new(),
            kind: "reaction".to_string(),
            emoji: emoji.to_string(),
            role_id: role_id.to_string(),
            label: label.to_string(),
            color: "#5865F2".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lists_every_role_below_the_text() {
        let panel = vec![row(1, "🔴", "100", "Red"), row(2, "🔵", "200", "")];

        assert_eq!(
            panel_description("Choose a colour", &panel),
            "Choose a colour\n\n🔴 <@&100> Red\n🔵 <@&200>"
        );
        assert_eq!(panel_description(" ", &panel[..1]), "🔴 <@&100> Red");
    }
}
