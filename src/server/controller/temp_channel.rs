use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use serenity::all::ChannelId;

use crate::{
    model::{
        api::ErrorDto,
        temp_channel::{
            CreateTempCreatorDto, TempChannelListDto, TempCreatorDto, TempCreatorListDto,
            UpdateTempCreatorDto,
        },
    },
    server::{
        bot::util::snowflake, error::AppError, middleware::auth::AuthGuard,
        service::temp_channel::TempChannelService, state::AppState,
    },
};

/// Tag for grouping temp voice channel endpoints in OpenAPI documentation
pub static TEMP_CHANNEL_TAG: &str = "temp_channel";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/temp-channels",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Active temp channels", body = TempChannelListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_temp_channels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let channels = TempChannelService::new(&state.db)
        .channels(guild_id)
        .await?
        .into_iter()
        .map(|channel| channel.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(TempChannelListDto { channels })))
}

/// Delete an active temp channel.
///
/// Removes the record and, while the bot is running, the Discord channel as well.
///
/// # Returns
/// - `204 No Content` - Channel removed
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such temp channel
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/temp-channels/{channel_id}",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("channel_id" = String, Path, description = "Discord channel ID")
    ),
    responses(
        (status = 204, description = "Temp channel deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Temp channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_temp_channel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, channel_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    TempChannelService::new(&state.db)
        .delete_channel(guild_id, &channel_id)
        .await?;

    if let (Some(http), Some(id)) = (state.bot.http().await, snowflake(&channel_id)) {
        if let Err(e) = ChannelId::new(id).delete(&http).await {
            tracing::warn!("Failed to delete Discord channel {}: {}", channel_id, e);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/temp-creators",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Configured creators", body = TempCreatorListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_temp_creators(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let creators = TempChannelService::new(&state.db)
        .creators(guild_id)
        .await?
        .into_iter()
        .map(|creator| creator.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(TempCreatorListDto { creators })))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/temp-creators/{creator_id}",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("creator_id" = i32, Path, description = "Creator ID")
    ),
    responses(
        (status = 200, description = "Creator", body = TempCreatorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_temp_creator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, creator_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let creator = TempChannelService::new(&state.db)
        .get_creator(guild_id, creator_id)
        .await?;

    Ok((StatusCode::OK, Json(creator.into_dto())))
}

/// Create a "join to create" channel.
///
/// # Returns
/// - `201 Created` - Creator with every omitted setting defaulted
/// - `400 Bad Request` - Missing channel or unknown numbering/position
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/temp-creators",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateTempCreatorDto,
    responses(
        (status = 201, description = "Creator created", body = TempCreatorDto),
        (status = 400, description = "Invalid creator data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_temp_creator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateTempCreatorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let creator = TempChannelService::new(&state.db)
        .create_creator(guild_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(creator.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/temp-creators/{creator_id}",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("creator_id" = i32, Path, description = "Creator ID")
    ),
    request_body = UpdateTempCreatorDto,
    responses(
        (status = 200, description = "Updated creator", body = TempCreatorDto),
        (status = 400, description = "Invalid creator data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_temp_creator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, creator_id)): Path<(u64, i32)>,
    Json(payload): Json<UpdateTempCreatorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let creator = TempChannelService::new(&state.db)
        .update_creator(guild_id, creator_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(creator.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/temp-creators/{creator_id}",
    tag = TEMP_CHANNEL_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("creator_id" = i32, Path, description = "Creator ID")
    ),
    responses(
        (status = 204, description = "Creator deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_temp_creator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, creator_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    TempChannelService::new(&state.db)
        .delete_creator(guild_id, creator_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
