use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        moderation::{ClearWarningsDto, ModLogListDto, WarningListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::moderation::ModerationService,
        state::AppState,
    },
};

/// Tag for grouping moderation endpoints in OpenAPI documentation
pub static MODERATION_TAG: &str = "moderation";

#[derive(Deserialize)]
pub struct WarningParams {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ModLogParams {
    #[serde(default = "default_mod_log_limit")]
    pub limit: u64,
}

fn default_mod_log_limit() -> u64 {
    50
}

/// List warnings of a guild, newest first.
///
/// # Arguments
/// - `params` - Optional `user_id` to only list the warnings of one member
///
/// # Returns
/// - `200 OK` - Matching warnings
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/warnings",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = Option<String>, Query, description = "Only warnings of this member")
    ),
    responses(
        (status = 200, description = "Warnings newest first", body = WarningListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_warnings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Query(params): Query<WarningParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let warnings = ModerationService::new(&state.db)
        .warnings(guild_id, params.user_id.as_deref())
        .await?
        .into_iter()
        .map(|warning| warning.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(WarningListDto { warnings })))
}

/// Delete every warning of a member and reset their warning counter.
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/warnings/{user_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Number of deleted warnings", body = ClearWarningsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_warnings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, user_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let deleted = ModerationService::new(&state.db)
        .clear_warnings(guild_id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(ClearWarningsDto { deleted })))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/modlogs",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("limit" = Option<u64>, Query, description = "Maximum entries (default: 50)")
    ),
    responses(
        (status = 200, description = "Moderation log newest first", body = ModLogListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mod_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Query(params): Query<ModLogParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let logs = ModerationService::new(&state.db)
        .mod_logs(guild_id, params.limit)
        .await?
        .into_iter()
        .map(|log| log.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ModLogListDto { logs })))
}
