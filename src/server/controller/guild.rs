use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild::{
            GuildConfigDto, GuildConfigListDto, GuildStatsDto, PermissionsDto,
            UpdateGuildConfigDto, UpdatePermissionDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::guild::GuildService,
        state::AppState,
    },
};

/// Tag for grouping guild configuration endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List all stored guild configurations.
///
/// # Returns
/// - `200 OK` - Every guild the bot has a configuration for
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Stored guild configurations", body = GuildConfigListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let guilds = GuildService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|config| config.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(GuildConfigListDto { guilds })))
}

/// Get the configuration of a guild.
///
/// Creates the configuration with default settings when the guild has none yet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - The configuration with every setting filled in
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild configuration", body = GuildConfigDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let config = GuildService::new(&state.db).get(guild_id).await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Update the configuration of a guild.
///
/// Only the fields present in the payload are changed, everything else keeps its
/// stored value.
///
/// # Returns
/// - `200 OK` - The merged configuration
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdateGuildConfigDto,
    responses(
        (status = 200, description = "Updated guild configuration", body = GuildConfigDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guild(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdateGuildConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let config = GuildService::new(&state.db)
        .update(guild_id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Get the dashboard overview of a guild.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/stats",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild statistics", body = GuildStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let stats = GuildService::new(&state.db).stats(guild_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/permissions",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Command permissions and staff roles", body = PermissionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let permissions = GuildService::new(&state.db).permissions(guild_id).await?;

    Ok((StatusCode::OK, Json(permissions)))
}

/// Set the roles allowed to use one command.
///
/// An empty role list removes the restriction for that command.
///
/// # Returns
/// - `200 OK` - Permissions after the change
/// - `400 Bad Request` - No command given
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/permissions",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdatePermissionDto,
    responses(
        (status = 200, description = "Updated permissions", body = PermissionsDto),
        (status = 400, description = "No command given", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdatePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let permissions = GuildService::new(&state.db)
        .set_permission(guild_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(permissions)))
}
