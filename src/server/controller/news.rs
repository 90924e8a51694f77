use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        news::{CreateNewsDto, NewsDto, NewsListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/news",
    tag = NEWS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "News newest first", body = NewsListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let news = NewsService::new(&state.db)
        .get_all(guild_id)
        .await?
        .into_iter()
        .map(|news| news.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(NewsListDto { news })))
}

/// Create a news entry.
///
/// Entries with a `scheduled_for` time are posted by the news scheduler once that time
/// has passed and a news channel is configured.
///
/// # Returns
/// - `201 Created` - Stored entry, not yet posted
/// - `400 Bad Request` - Empty title/content or unparsable schedule
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/news",
    tag = NEWS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News created", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let news = NewsService::new(&state.db).create(guild_id, payload).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/news/{news_id}",
    tag = NEWS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("news_id" = String, Path, description = "News ID")
    ),
    responses(
        (status = 204, description = "News deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((guild_id, news_id)): Path<(u64, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    NewsService::new(&state.db).delete(guild_id, &news_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
