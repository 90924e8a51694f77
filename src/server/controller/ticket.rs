use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, Http,
    ReactionType,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{
            CreateTicketPanelDto, TicketDto, TicketListDto, TicketPanelDto, TicketPanelListDto,
            TicketStatsDto, UpdateTicketPanelDto,
        },
    },
    server::{
        bot::{command::ticket_open_id, util::embed_colour, util::snowflake},
        error::AppError,
        middleware::auth::AuthGuard,
        model::ticket::TicketPanel,
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

#[derive(Deserialize)]
pub struct TicketFilterParams {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct TicketActorParams {
    pub user_id: String,
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/ticket-panels",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Ticket panels of the guild", body = TicketPanelListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_panels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let panels = TicketService::new(&state.db)
        .panels(guild_id)
        .await?
        .into_iter()
        .map(|panel| panel.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(TicketPanelListDto { panels })))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/ticket-panels/{panel_id}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("panel_id" = i32, Path, description = "Ticket panel ID")
    ),
    responses(
        (status = 200, description = "Ticket panel", body = TicketPanelDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket panel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, panel_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let panel = TicketService::new(&state.db)
        .get_panel(guild_id, panel_id)
        .await?;

    Ok((StatusCode::OK, Json(panel.into_dto())))
}

/// Create a ticket panel.
///
/// The panel is stored only. Use the send endpoint to post it to Discord.
///
/// # Returns
/// - `201 Created` - Panel with every omitted setting defaulted
/// - `400 Bad Request` - No channel given
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/ticket-panels",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateTicketPanelDto,
    responses(
        (status = 201, description = "Ticket panel created", body = TicketPanelDto),
        (status = 400, description = "Invalid panel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateTicketPanelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let panel = TicketService::new(&state.db)
        .create_panel(guild_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(panel.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/ticket-panels/{panel_id}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("panel_id" = i32, Path, description = "Ticket panel ID")
    ),
    request_body = UpdateTicketPanelDto,
    responses(
        (status = 200, description = "Updated ticket panel", body = TicketPanelDto),
        (status = 400, description = "Invalid panel data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket panel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, panel_id)): Path<(u64, i32)>,
    Json(payload): Json<UpdateTicketPanelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let panel = TicketService::new(&state.db)
        .update_panel(guild_id, panel_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(panel.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/ticket-panels/{panel_id}",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("panel_id" = i32, Path, description = "Ticket panel ID")
    ),
    responses(
        (status = 204, description = "Ticket panel deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket panel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, panel_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    TicketService::new(&state.db)
        .delete_panel(guild_id, panel_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Post a ticket panel to its Discord channel.
///
/// Sends the panel embed with an open-ticket button through the running bot and
/// remembers the message id.
///
/// # Returns
/// - `200 OK` - Panel posted, returned with its message id
/// - `400 Bad Request` - Bot not running or invalid channel
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such panel
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/ticket-panels/{panel_id}/send",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("panel_id" = i32, Path, description = "Ticket panel ID")
    ),
    responses(
        (status = 200, description = "Panel posted", body = TicketPanelDto),
        (status = 400, description = "Bot not running or invalid channel", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket panel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_panel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, panel_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let service = TicketService::new(&state.db);
    let panel = service.get_panel(guild_id, panel_id).await?;
    let http = state.bot.require_http().await?;

    let message_id = post_panel(&http, &panel).await?;
    service.mark_panel_sent(panel.id, &message_id).await?;

    let panel = service.get_panel(guild_id, panel_id).await?;

    Ok((StatusCode::OK, Json(panel.into_dto())))
}

async fn post_panel(http: &Http, panel: &TicketPanel) -> Result<String, AppError> {
    let channel_id = snowflake(&panel.channel_id)
        .map(ChannelId::new)
        .ok_or_else(|| AppError::BadRequest("Invalid panel channel".to_string()))?;

    let mut button = CreateButton::new(ticket_open_id(panel.id))
        .label(&panel.button_label)
        .style(ButtonStyle::Primary);
    if let Ok(emoji) = ReactionType::try_from(panel.button_emoji.as_str()) {
        button = button.emoji(emoji);
    }

    let embed = CreateEmbed::new()
        .title(&panel.title)
        .description(&panel.description)
        .colour(embed_colour(&panel.color));

    let message = channel_id
        .send_message(
            http,
            CreateMessage::new()
                .embed(embed)
                .components(vec![CreateActionRow::Buttons(vec![button])]),
        )
        .await?;

    Ok(message.id.get().to_string())
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("status" = Option<String>, Query, description = "open, claimed or closed")
    ),
    responses(
        (status = 200, description = "Tickets newest first", body = TicketListDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Query(params): Query<TicketFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let tickets = TicketService::new(&state.db)
        .tickets(guild_id, params.status.as_deref())
        .await?
        .into_iter()
        .map(|ticket| ticket.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(TicketListDto { tickets })))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets/stats",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Ticket counts per status", body = TicketStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let stats = TicketService::new(&state.db).stats(guild_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Claim an open ticket.
///
/// # Returns
/// - `200 OK` - Ticket now claimed by `user_id`
/// - `400 Bad Request` - Ticket is not open
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}/claim",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = i32, Path, description = "Ticket ID"),
        ("user_id" = String, Query, description = "Discord user claiming the ticket")
    ),
    responses(
        (status = 200, description = "Ticket claimed", body = TicketDto),
        (status = 400, description = "Ticket is not open", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn claim_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, ticket_id)): Path<(u64, i32)>,
    Query(params): Query<TicketActorParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let ticket = TicketService::new(&state.db)
        .claim(guild_id, ticket_id, &params.user_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// Close a ticket that is not closed yet.
///
/// # Returns
/// - `200 OK` - Ticket closed
/// - `400 Bad Request` - Ticket already closed
/// - `404 Not Found` - No such ticket
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/tickets/{ticket_id}/close",
    tag = TICKET_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("ticket_id" = i32, Path, description = "Ticket ID"),
        ("user_id" = String, Query, description = "Discord user closing the ticket")
    ),
    responses(
        (status = 200, description = "Ticket closed", body = TicketDto),
        (status = 400, description = "Ticket already closed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn close_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, ticket_id)): Path<(u64, i32)>,
    Query(params): Query<TicketActorParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let ticket = TicketService::new(&state.db)
        .close(guild_id, ticket_id, &params.user_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}
