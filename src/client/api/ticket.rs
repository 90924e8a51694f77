use crate::{
    client::model::error::ApiError,
    model::ticket::{
        CreateTicketPanelDto, TicketDto, TicketListDto, TicketPanelDto, TicketPanelListDto,
        TicketStatsDto, UpdateTicketPanelDto,
    },
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, put, send_request,
    serialize_json,
};

pub async fn get_panels(guild_id: u64) -> Result<TicketPanelListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/ticket-panels"))).await?;
    parse_response(response).await
}

pub async fn create_panel(
    guild_id: u64,
    payload: CreateTicketPanelDto,
) -> Result<TicketPanelDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/ticket-panels")).body(body)).await?;
    parse_response(response).await
}

pub async fn update_panel(
    guild_id: u64,
    panel_id: i32,
    payload: UpdateTicketPanelDto,
) -> Result<TicketPanelDto, ApiError> {
    let url = guild_url(guild_id, &format!("/ticket-panels/{}", panel_id));
    let body = serialize_json(&payload)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_panel(guild_id: u64, panel_id: i32) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/ticket-panels/{}", panel_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// Posts the panel message with its open button to the panel channel
pub async fn send_panel(guild_id: u64, panel_id: i32) -> Result<TicketPanelDto, ApiError> {
    let url = guild_url(guild_id, &format!("/ticket-panels/{}/send", panel_id));
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn get_tickets(guild_id: u64, status: Option<&str>) -> Result<TicketListDto, ApiError> {
    let url = match status {
        Some(status) => guild_url(guild_id, &format!("/tickets?status={}", status)),
        None => guild_url(guild_id, "/tickets"),
    };
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_ticket_stats(guild_id: u64) -> Result<TicketStatsDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/tickets/stats"))).await?;
    parse_response(response).await
}

pub async fn claim_ticket(
    guild_id: u64,
    ticket_id: i32,
    user_id: &str,
) -> Result<TicketDto, ApiError> {
    let url = guild_url(
        guild_id,
        &format!("/tickets/{}/claim?user_id={}", ticket_id, user_id),
    );
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn close_ticket(
    guild_id: u64,
    ticket_id: i32,
    user_id: &str,
) -> Result<TicketDto, ApiError> {
    let url = guild_url(
        guild_id,
        &format!("/tickets/{}/close?user_id={}", ticket_id, user_id),
    );
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
