use crate::{
    client::model::error::ApiError,
    model::command::{CreateCustomCommandDto, CustomCommandDto, CustomCommandListDto},
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_commands(guild_id: u64) -> Result<CustomCommandListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/commands"))).await?;
    parse_response(response).await
}

pub async fn create_command(
    guild_id: u64,
    payload: CreateCustomCommandDto,
) -> Result<CustomCommandDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/commands")).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_command(guild_id: u64, name: &str) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/commands/{}", name));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
