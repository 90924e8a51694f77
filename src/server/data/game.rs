//! Game record repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::game::{Game, GameStats, RecordGameParam},
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the games of a guild that are still running, newest first.
    pub async fn get_active(&self, guild_id: u64) -> Result<Vec<Game>, AppError> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::game::Column::Active.eq(true))
            .order_by_desc(entity::game::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Game::from_entity)
            .collect()
    }

    /// Counts running games of a guild, used to enforce `max_active_games`.
    pub async fn count_active(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::Game::find()
            .filter(entity::game::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::game::Column::Active.eq(true))
            .count(self.db)
            .await?)
    }

    /// Games of a guild created at or after `since`, newest first.
    ///
    /// Filtered in memory since SQLite compares the stored timestamps as text.
    pub async fn created_since(
        &self,
        guild_id: u64,
        since: DateTime<Utc>,
    ) -> Result<Vec<Game>, AppError> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::game::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|game| game.created_at >= since)
            .map(Game::from_entity)
            .collect()
    }

    /// Stores a game that has already been decided.
    pub async fn record(&self, guild_id: u64, param: RecordGameParam) -> Result<Game, AppError> {
        let now = Utc::now();
        let entity = entity::game::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id),
            game_type: ActiveValue::Set(param.game_type),
            players: ActiveValue::Set(serde_json::to_string(&param.players)?),
            winner_id: ActiveValue::Set(param.winner_id),
            active: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ended_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Game::from_entity(entity)
    }

    /// Computes totals and the most frequent winner of a guild.
    ///
    /// Ties between winners are broken by the smaller user id so the result is stable.
    pub async fn stats(&self, guild_id: u64) -> Result<GameStats, AppError> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?;

        let active_games = games.iter().filter(|game| game.active).count() as u64;

        let mut wins: HashMap<&str, u64> = HashMap::new();
        for winner in games.iter().filter_map(|game| game.winner_id.as_deref()) {
            *wins.entry(winner).or_default() += 1;
        }

        let top_player = wins
            .into_iter()
            .max_by(|(a_id, a_wins), (b_id, b_wins)| a_wins.cmp(b_wins).then(b_id.cmp(a_id)))
            .map(|(winner, _)| winner.to_string());

        Ok(GameStats {
            total_games: games.len() as u64,
            active_games,
            top_player,
        })
    }
}
