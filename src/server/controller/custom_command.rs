use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        command::{CreateCustomCommandDto, CustomCommandDto, CustomCommandListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::custom_command::CustomCommandService, state::AppState,
    },
};

/// Tag for grouping custom command endpoints in OpenAPI documentation
pub static COMMAND_TAG: &str = "command";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/commands",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Custom commands of the guild", body = CustomCommandListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_commands(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let commands = CustomCommandService::new(&state.db)
        .get_all(guild_id)
        .await?
        .into_iter()
        .map(|command| command.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(CustomCommandListDto { commands })))
}

/// Create a custom command or replace the response of an existing one.
///
/// The name is trimmed, lower-cased and stripped of a leading prefix character.
///
/// # Returns
/// - `201 Created` - Stored command
/// - `400 Bad Request` - Empty name or response
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/commands",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateCustomCommandDto,
    responses(
        (status = 201, description = "Command stored", body = CustomCommandDto),
        (status = 400, description = "Invalid command", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateCustomCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let command = CustomCommandService::new(&state.db)
        .upsert(guild_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(command.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/commands/{name}",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("name" = String, Path, description = "Command name")
    ),
    responses(
        (status = 204, description = "Command deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, name)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    CustomCommandService::new(&state.db)
        .delete(guild_id, &name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
