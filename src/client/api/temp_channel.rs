use crate::{
    client::model::error::ApiError,
    model::temp_channel::{
        CreateTempCreatorDto, TempChannelListDto, TempCreatorDto, TempCreatorListDto,
        UpdateTempCreatorDto,
    },
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, put, send_request,
    serialize_json,
};

pub async fn get_temp_channels(guild_id: u64) -> Result<TempChannelListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/temp-channels"))).await?;
    parse_response(response).await
}

pub async fn delete_temp_channel(guild_id: u64, channel_id: &str) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/temp-channels/{}", channel_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_temp_creators(guild_id: u64) -> Result<TempCreatorListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/temp-creators"))).await?;
    parse_response(response).await
}

pub async fn create_temp_creator(
    guild_id: u64,
    payload: CreateTempCreatorDto,
) -> Result<TempCreatorDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/temp-creators")).body(body)).await?;
    parse_response(response).await
}

pub async fn update_temp_creator(
    guild_id: u64,
    creator_id: i32,
    payload: UpdateTempCreatorDto,
) -> Result<TempCreatorDto, ApiError> {
    let url = guild_url(guild_id, &format!("/temp-creators/{}", creator_id));
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_temp_creator(guild_id: u64, creator_id: i32) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/temp-creators/{}", creator_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
