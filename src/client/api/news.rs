use crate::{
    client::model::error::ApiError,
    model::news::{CreateNewsDto, NewsDto, NewsListDto},
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_news(guild_id: u64) -> Result<NewsListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/news"))).await?;
    parse_response(response).await
}

pub async fn create_news(guild_id: u64, payload: CreateNewsDto) -> Result<NewsDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/news")).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_news(guild_id: u64, news_id: &str) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/news/{}", news_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
