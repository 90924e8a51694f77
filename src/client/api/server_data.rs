use crate::{
    client::model::error::ApiError,
    model::{api::MessageDto, server_data::ServerDataDto},
};

use super::helper::{get, guild_url, parse_response, post, send_request};

pub async fn get_server_data(guild_id: u64) -> Result<ServerDataDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/server-data"))).await?;
    parse_response(response).await
}

/// Asks the running bot to refresh the cached roles, channels & emojis
pub async fn sync_server_data(guild_id: u64) -> Result<MessageDto, ApiError> {
    let response = send_request(post(&guild_url(guild_id, "/server-data/sync"))).await?;
    parse_response(response).await
}
