use crate::{
    client::model::error::ApiError,
    model::reaction_role::{CreateReactionRoleDto, CreatedReactionRolesDto, ReactionRoleListDto},
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_reaction_roles(guild_id: u64) -> Result<ReactionRoleListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/reaction-roles"))).await?;
    parse_response(response).await
}

pub async fn create_reaction_roles(
    guild_id: u64,
    payload: CreateReactionRoleDto,
) -> Result<CreatedReactionRolesDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/reaction-roles")).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_reaction_role(guild_id: u64, reaction_role_id: i32) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/reaction-roles/{}", reaction_role_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Posts the panel `reaction_role_id` belongs to through the bot.
pub async fn send_reaction_role_panel(
    guild_id: u64,
    reaction_role_id: i32,
) -> Result<ReactionRoleListDto, ApiError> {
    let url = guild_url(guild_id, &format!("/reaction-roles/{}/send", reaction_role_id));
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
