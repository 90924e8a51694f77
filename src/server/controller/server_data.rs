use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        server_data::ServerDataDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::server_data::ServerDataService,
        state::AppState,
    },
};

/// Tag for grouping server data endpoints in OpenAPI documentation
pub static SERVER_DATA_TAG: &str = "server_data";

/// Get the cached roles, channels, categories & emojis of a guild.
///
/// Feeds the selectors of the dashboard. The data stays available while the bot is
/// offline and reflects the last sync.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/server-data",
    tag = SERVER_DATA_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Cached server data", body = ServerDataDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let data = ServerDataService::new(&state.db).get(guild_id).await?;

    Ok((StatusCode::OK, Json(data.into_dto())))
}

/// Re-fetch the server data of a guild through the running bot.
///
/// # Returns
/// - `200 OK` - Cache replaced
/// - `400 Bad Request` - Bot not running
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Discord or database error
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/server-data/sync",
    tag = SERVER_DATA_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Server data synced", body = MessageDto),
        (status = 400, description = "Bot not running", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_server_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let http = state.bot.require_http().await?;
    ServerDataService::new(&state.db)
        .sync(&http, guild_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Server data synced".to_string(),
        }),
    ))
}
