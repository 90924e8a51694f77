use crate::{
    client::model::error::ApiError,
    model::{
        api::ActionResultDto,
        bot::{BotLogsDto, BotStatusDto, BotTestDto, ConfigureBotDto},
    },
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

pub async fn get_status() -> Result<BotStatusDto, ApiError> {
    let response = send_request(get("/api/bot/status")).await?;
    parse_response(response).await
}

pub async fn configure(payload: ConfigureBotDto) -> Result<ActionResultDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/bot/configure").body(body)).await?;
    parse_response(response).await
}

pub async fn start() -> Result<ActionResultDto, ApiError> {
    let response = send_request(post("/api/bot/start")).await?;
    parse_response(response).await
}

pub async fn stop() -> Result<ActionResultDto, ApiError> {
    let response = send_request(post("/api/bot/stop")).await?;
    parse_response(response).await
}

pub async fn get_logs(lines: usize) -> Result<BotLogsDto, ApiError> {
    let url = format!("/api/bot/logs?lines={}", lines);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn test() -> Result<BotTestDto, ApiError> {
    let response = send_request(post("/api/bot/test")).await?;
    parse_response(response).await
}
