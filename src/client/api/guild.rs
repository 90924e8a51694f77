use crate::{
    client::model::error::ApiError,
    model::guild::{
        GuildConfigDto, GuildStatsDto, PermissionsDto, UpdateGuildConfigDto, UpdatePermissionDto,
    },
};

use super::helper::{get, guild_url, parse_response, put, send_request, serialize_json};

pub async fn get_guild(guild_id: u64) -> Result<GuildConfigDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, ""))).await?;
    parse_response(response).await
}

/// Saves the fields set in `payload`, returning the merged configuration
pub async fn update_guild(
    guild_id: u64,
    payload: UpdateGuildConfigDto,
) -> Result<GuildConfigDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put(&guild_url(guild_id, "")).body(body)).await?;
    parse_response(response).await
}

pub async fn get_guild_stats(guild_id: u64) -> Result<GuildStatsDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/stats"))).await?;
    parse_response(response).await
}

pub async fn get_permissions(guild_id: u64) -> Result<PermissionsDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/permissions"))).await?;
    parse_response(response).await
}

pub async fn update_permission(
    guild_id: u64,
    payload: UpdatePermissionDto,
) -> Result<PermissionsDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put(&guild_url(guild_id, "/permissions")).body(body)).await?;
    parse_response(response).await
}
