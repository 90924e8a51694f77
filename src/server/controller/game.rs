use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameListDto, GameStatsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/games",
    tag = GAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Games still running", body = GameListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_games(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let games = GameService::new(&state.db)
        .active(guild_id)
        .await?
        .into_iter()
        .map(|game| game.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(GameListDto { games })))
}

/// Get game totals and the member with the most wins.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/games/stats",
    tag = GAME_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Game statistics", body = GameStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let stats = GameService::new(&state.db).stats(guild_id).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
