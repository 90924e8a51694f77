use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameDto {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub game_type: String,
    pub players: Vec<String>,
    pub winner_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameListDto {
    pub games: Vec<GameDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameStatsDto {
    pub total_games: u64,
    pub active_games: u64,
    /// Shortened id of the member with the most wins
    pub top_player: Option<String>,
}
