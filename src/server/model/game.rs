//! Game record domain model.

use chrono::{DateTime, Utc};

use crate::{
    model::game::{GameDto, GameStatsDto},
    server::{
        error::AppError,
        util::parse::{parse_json_column, parse_u64_from_string, shorten_id},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: String,
    pub game_type: String,
    pub players: Vec<String>,
    pub winner_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: entity.channel_id,
            game_type: entity.game_type,
            players: parse_json_column("game", "players", &entity.players)?,
            winner_id: entity.winner_id,
            active: entity.active,
            created_at: entity.created_at,
            ended_at: entity.ended_at,
        })
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            channel_id: self.channel_id,
            game_type: self.game_type,
            players: self.players,
            winner_id: self.winner_id,
            active: self.active,
            created_at: self.created_at,
            ended_at: self.ended_at,
        }
    }
}

/// Parameters for recording a game that has already finished.
#[derive(Debug, Clone)]
pub struct RecordGameParam {
    pub channel_id: String,
    pub game_type: String,
    pub players: Vec<String>,
    pub winner_id: Option<String>,
}

/// Aggregated game counters of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub total_games: u64,
    pub active_games: u64,
    /// Full Discord id of the most frequent winner.
    pub top_player: Option<String>,
}

impl GameStats {
    /// Converts to a DTO, shortening the top player id for display.
    pub fn into_dto(self) -> GameStatsDto {
        GameStatsDto {
            total_games: self.total_games,
            active_games: self.active_games,
            top_player: self.top_player.as_deref().map(shorten_id),
        }
    }
}
