use crate::{
    client::model::error::ApiError,
    model::moderation::{ClearWarningsDto, ModLogListDto, WarningListDto},
};

use super::helper::{delete, get, guild_url, parse_response, send_request};

pub async fn get_warnings(guild_id: u64) -> Result<WarningListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/warnings"))).await?;
    parse_response(response).await
}

pub async fn clear_warnings(guild_id: u64, user_id: &str) -> Result<ClearWarningsDto, ApiError> {
    let url = guild_url(guild_id, &format!("/warnings/{}", user_id));
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}

pub async fn get_mod_logs(guild_id: u64, limit: u64) -> Result<ModLogListDto, ApiError> {
    let url = guild_url(guild_id, &format!("/modlogs?limit={}", limit));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
