use crate::{
    client::model::error::ApiError,
    model::game::{GameListDto, GameStatsDto},
};

use super::helper::{get, guild_url, parse_response, send_request};

pub async fn get_active_games(guild_id: u64) -> Result<GameListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/games"))).await?;
    parse_response(response).await
}

pub async fn get_game_stats(guild_id: u64) -> Result<GameStatsDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/games/stats"))).await?;
    parse_response(response).await
}
