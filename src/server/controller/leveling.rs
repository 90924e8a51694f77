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
        leveling::{
            CreateLevelRewardDto, LeaderboardDto, LevelRewardDto, LevelRewardListDto, MemberDto,
            VoiceSessionListDto, VoiceStatsDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::leveling::LevelingService,
        state::AppState,
    },
};

/// Tag for grouping leveling endpoints in OpenAPI documentation
pub static LEVELING_TAG: &str = "leveling";

#[derive(Deserialize)]
pub struct LeaderboardParams {
    #[serde(default = "default_leaderboard_limit")]
    pub limit: u64,
}

fn default_leaderboard_limit() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct UpdateMemberParams {
    pub xp: Option<i64>,
    pub level: Option<i32>,
}

#[derive(Deserialize)]
pub struct ToggleRewardParams {
    pub enabled: bool,
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/leaderboard",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("limit" = Option<u64>, Query, description = "Number of members (default: 10)")
    ),
    responses(
        (status = 200, description = "Members ordered by XP", body = LeaderboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let leaderboard = LevelingService::new(&state.db)
        .leaderboard(guild_id, params.limit)
        .await?
        .into_iter()
        .map(|member| member.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(LeaderboardDto { leaderboard })))
}

/// Get the leveling data of a member, creating an empty record when absent.
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/users/{user_id}",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Member data", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, user_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let member = LevelingService::new(&state.db)
        .get_member(guild_id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Overwrite XP and/or level of a member.
///
/// When only `xp` is given the level is recomputed from the XP curve.
///
/// # Returns
/// - `200 OK` - Updated member
/// - `400 Bad Request` - Neither value given or a negative value
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/users/{user_id}",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = String, Path, description = "Discord user ID"),
        ("xp" = Option<i64>, Query, description = "New total XP"),
        ("level" = Option<i32>, Query, description = "New level")
    ),
    responses(
        (status = 200, description = "Updated member", body = MemberDto),
        (status = 400, description = "Invalid values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, user_id)): Path<(u64, String)>,
    Query(params): Query<UpdateMemberParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let member = LevelingService::new(&state.db)
        .update_member(guild_id, &user_id, params.xp, params.level)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/level-rewards",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Rewards ordered by level", body = LevelRewardListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let rewards = LevelingService::new(&state.db)
        .rewards(guild_id)
        .await?
        .into_iter()
        .map(|reward| reward.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(LevelRewardListDto { rewards })))
}

/// Create a level reward.
///
/// # Returns
/// - `201 Created` - Reward created and enabled
/// - `400 Bad Request` - Level below 1, unknown type or empty value
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/level-rewards",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateLevelRewardDto,
    responses(
        (status = 201, description = "Reward created", body = LevelRewardDto),
        (status = 400, description = "Invalid reward data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateLevelRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reward = LevelingService::new(&state.db)
        .create_reward(guild_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(reward.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/level-rewards/{reward_id}",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("reward_id" = i32, Path, description = "Reward ID")
    ),
    responses(
        (status = 204, description = "Reward deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, reward_id)): Path<(u64, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    LevelingService::new(&state.db)
        .delete_reward(guild_id, reward_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/level-rewards/{reward_id}/toggle",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("reward_id" = i32, Path, description = "Reward ID"),
        ("enabled" = bool, Query, description = "Whether the reward is granted")
    ),
    responses(
        (status = 200, description = "Updated reward", body = LevelRewardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_reward(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, reward_id)): Path<(u64, i32)>,
    Query(params): Query<ToggleRewardParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reward = LevelingService::new(&state.db)
        .toggle_reward(guild_id, reward_id, params.enabled)
        .await?;

    Ok((StatusCode::OK, Json(reward.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/voice-sessions",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Latest 50 voice sessions", body = VoiceSessionListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_voice_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let sessions = LevelingService::new(&state.db)
        .voice_sessions(guild_id)
        .await?
        .into_iter()
        .map(|session| session.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(VoiceSessionListDto { sessions })))
}

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/voice-stats",
    tag = LEVELING_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Ended & running session counts", body = VoiceStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_voice_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (total_sessions, active_sessions) = LevelingService::new(&state.db)
        .voice_stats(guild_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(VoiceStatsDto {
            total_sessions,
            active_sessions,
        }),
    ))
}
