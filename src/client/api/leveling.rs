use crate::{
    client::model::error::ApiError,
    model::leveling::{
        CreateLevelRewardDto, LeaderboardDto, LevelRewardDto, LevelRewardListDto,
        VoiceSessionListDto, VoiceStatsDto,
    },
};

use super::helper::{
    delete, get, guild_url, parse_empty_response, parse_response, post, put, send_request,
    serialize_json,
};

pub async fn get_leaderboard(guild_id: u64, limit: u64) -> Result<LeaderboardDto, ApiError> {
    let url = guild_url(guild_id, &format!("/leaderboard?limit={}", limit));
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_rewards(guild_id: u64) -> Result<LevelRewardListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/level-rewards"))).await?;
    parse_response(response).await
}

pub async fn create_reward(
    guild_id: u64,
    payload: CreateLevelRewardDto,
) -> Result<LevelRewardDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post(&guild_url(guild_id, "/level-rewards")).body(body)).await?;
    parse_response(response).await
}

pub async fn toggle_reward(
    guild_id: u64,
    reward_id: i32,
    enabled: bool,
) -> Result<LevelRewardDto, ApiError> {
    let url = guild_url(
        guild_id,
        &format!("/level-rewards/{}/toggle?enabled={}", reward_id, enabled),
    );
    let response = send_request(put(&url)).await?;
    parse_response(response).await
}

pub async fn delete_reward(guild_id: u64, reward_id: i32) -> Result<(), ApiError> {
    let url = guild_url(guild_id, &format!("/level-rewards/{}", reward_id));
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_voice_sessions(guild_id: u64) -> Result<VoiceSessionListDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/voice-sessions"))).await?;
    parse_response(response).await
}

pub async fn get_voice_stats(guild_id: u64) -> Result<VoiceStatsDto, ApiError> {
    let response = send_request(get(&guild_url(guild_id, "/voice-stats"))).await?;
    parse_response(response).await
}
