use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ActionResultDto, ErrorDto},
        bot::{BotLogsDto, BotStatusDto, BotTestDto, ConfigureBotDto},
    },
    server::{
        bot::log::LogType,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::bot_setting::BotSettingService,
        state::AppState,
    },
};

/// Tag for grouping bot control endpoints in OpenAPI documentation
pub static BOT_TAG: &str = "bot";

#[derive(Deserialize)]
pub struct LogParams {
    #[serde(default = "default_log_lines")]
    pub lines: usize,
    #[serde(default)]
    pub log_type: Option<String>,
}

fn default_log_lines() -> usize {
    50
}

#[utoipa::path(
    get,
    path = "/api/bot/status",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Bot state and configured credentials", body = BotStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let status = state.bot.status().await?;

    Ok((StatusCode::OK, Json(status)))
}

/// Store the Discord bot token and/or the OpenAI API key.
///
/// Empty values are ignored so either credential can be changed on its own.
///
/// # Access Control
/// - `Admin` - Only admins can change bot credentials
///
/// # Returns
/// - `200 OK` - Credentials saved
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/api/bot/configure",
    tag = BOT_TAG,
    request_body = ConfigureBotDto,
    responses(
        (status = 200, description = "Credentials saved", body = ActionResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn configure(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ConfigureBotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let settings = BotSettingService::new(&state.db);

    if let Some(token) = payload.discord_token.as_deref().map(str::trim) {
        if !token.is_empty() {
            settings.set_discord_token(token).await?;
        }
    }
    if let Some(key) = payload.openai_api_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            settings.set_openai_api_key(key).await?;
        }
    }

    Ok((
        StatusCode::OK,
        Json(ActionResultDto {
            success: true,
            message: "Configuration saved".to_string(),
        }),
    ))
}

/// Start the Discord bot with the stored token.
///
/// # Returns
/// - `200 OK` - Bot started, or `success: false` when it already runs
/// - `400 Bad Request` - No token configured
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/bot/start",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Start result", body = ActionResultDto),
        (status = 400, description = "No token configured", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let token = BotSettingService::new(&state.db)
        .discord_token()
        .await?
        .ok_or_else(|| AppError::BadRequest("No Discord bot token configured".to_string()))?;

    let result = state.bot.start(token).await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/api/bot/stop",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Stop result", body = ActionResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let result = state.bot.stop().await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get the most recent bot log lines.
///
/// `stdout` holds lifecycle & info lines, `stderr` holds errors.
#[utoipa::path(
    get,
    path = "/api/bot/logs",
    tag = BOT_TAG,
    params(
        ("lines" = Option<usize>, Query, description = "Lines per stream (default: 50)"),
        ("log_type" = Option<String>, Query, description = "all, stdout or stderr")
    ),
    responses(
        (status = 200, description = "Recent log lines", body = BotLogsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LogParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let log_type = params
        .log_type
        .as_deref()
        .map(LogType::parse)
        .unwrap_or(LogType::All);
    let logs = state.bot.log().tail(params.lines, log_type);

    Ok((StatusCode::OK, Json(logs)))
}

/// Check the stored bot configuration for obvious problems.
#[utoipa::path(
    post,
    path = "/api/bot/test",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Configuration check result", body = BotTestDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn test(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let result = state.bot.test().await?;

    Ok((StatusCode::OK, Json(result)))
}
