//! Game records and the rules deciding whether a game may be played.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, guild_config::GuildConfigRepository},
    error::AppError,
    model::game::{Game, GameStats, RecordGameParam},
};

pub const COINFLIP: &str = "coinflip";

/// Why a game request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameDenied {
    Disabled,
    /// Games are restricted to this channel.
    WrongChannel(String),
    TooManyActive,
    /// Seconds until the member may play again.
    Cooldown(i64),
}

#[derive(Debug, Clone)]
pub enum CoinflipOutcome {
    Played { game: Game, heads: bool },
    Denied(GameDenied),
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn active(&self, guild_id: u64) -> Result<Vec<Game>, AppError> {
        GameRepository::new(self.db).get_active(guild_id).await
    }

    pub async fn stats(&self, guild_id: u64) -> Result<GameStats, AppError> {
        GameRepository::new(self.db).stats(guild_id).await
    }

    /// Checks the guild's game settings for a game started by `user_id`.
    ///
    /// # Returns
    /// - `Ok(None)` - The game may be played
    /// - `Ok(Some(GameDenied))` - Reason the game is refused
    pub async fn check_allowed(
        &self,
        guild_id: u64,
        game_type: &str,
        channel_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<GameDenied>, AppError> {
        let settings = GuildConfigRepository::new(self.db)
            .get_or_create(guild_id)
            .await?
            .settings;

        if !settings.games_enabled || settings.disabled_games.iter().any(|g| g == game_type) {
            return Ok(Some(GameDenied::Disabled));
        }
        if !settings.games_channel.is_empty() && settings.games_channel != channel_id {
            return Ok(Some(GameDenied::WrongChannel(settings.games_channel)));
        }

        let repo = GameRepository::new(self.db);
        if repo.count_active(guild_id).await? >= u64::try_from(settings.max_active_games).unwrap_or(0)
        {
            return Ok(Some(GameDenied::TooManyActive));
        }

        if settings.game_cooldown > 0 {
            let cooldown = Duration::seconds(i64::from(settings.game_cooldown));
            let last_played = repo
                .created_since(guild_id, now - cooldown)
                .await?
                .into_iter()
                .find(|game| game.players.iter().any(|player| player == user_id));

            if let Some(game) = last_played {
                let remaining = (game.created_at + cooldown - now).num_seconds().max(1);
                return Ok(Some(GameDenied::Cooldown(remaining)));
            }
        }

        Ok(None)
    }

    /// Plays a coin flip for `user_id`, who wins on heads.
    ///
    /// The flip result is passed in so callers decide the randomness source.
    pub async fn play_coinflip(
        &self,
        guild_id: u64,
        channel_id: &str,
        user_id: &str,
        heads: bool,
    ) -> Result<CoinflipOutcome, AppError> {
        if let Some(denied) = self
            .check_allowed(guild_id, COINFLIP, channel_id, user_id, Utc::now())
            .await?
        {
            return Ok(CoinflipOutcome::Denied(denied));
        }

        let game = GameRepository::new(self.db)
            .record(
                guild_id,
                RecordGameParam {
                    channel_id: channel_id.to_string(),
                    game_type: COINFLIP.to_string(),
                    players: vec![user_id.to_string()],
                    winner_id: heads.then(|| user_id.to_string()),
                },
            )
            .await?;

        Ok(CoinflipOutcome::Played { game, heads })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::guild::UpdateGuildConfigDto, server::service::guild::GuildService};
    use test_utils::builder::TestBuilder;

    async fn setup() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::GuildConfig)
            .with_table(entity::prelude::Game)
            .build()
            .await
            .unwrap()
    }

    async fn configure(db: &DatabaseConnection, dto: UpdateGuildConfigDto) -> Result<(), AppError> {
        GuildService::new(db).update(1, dto.into()).await?;
        Ok(())
    }

    /// Tests that heads records the caller as winner.
    ///
    /// Expected: winner set on heads, no winner on tails
    #[tokio::test]
    async fn heads_wins() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        configure(
            db,
            UpdateGuildConfigDto {
                game_cooldown: Some(0),
                ..Default::default()
            },
        )
        .await?;

        let service = GameService::new(db);
        let CoinflipOutcome::Played { game, .. } = service.play_coinflip(1, "10", "5", true).await?
        else {
            panic!("coinflip should be allowed");
        };
        assert_eq!(game.winner_id.as_deref(), Some("5"));

        let CoinflipOutcome::Played { game, .. } = service.play_coinflip(1, "10", "5", false).await?
        else {
            panic!("coinflip should be allowed");
        };
        assert_eq!(game.winner_id, None);

        let stats = service.stats(1).await?;
        assert_eq!(stats.total_games, 2);

        Ok(())
    }

    /// Tests the game settings that refuse a coin flip.
    ///
    /// Expected: Disabled, WrongChannel and Cooldown in turn
    #[tokio::test]
    async fn respects_settings() -> Result<(), AppError> {
        let test = setup().await;
        let db = test.db.as_ref().unwrap();
        let service = GameService::new(db);

        configure(
            db,
            UpdateGuildConfigDto {
                disabled_games: Some(vec![COINFLIP.to_string()]),
                ..Default::default()
            },
        )
        .await?;
        assert!(matches!(
            service.play_coinflip(1, "10", "5", true).await?,
            CoinflipOutcome::Denied(GameDenied::Disabled)
        ));

        configure(
            db,
            UpdateGuildConfigDto {
                disabled_games: Some(Vec::new()),
                games_channel: Some("20".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert!(matches!(
            service.play_coinflip(1, "10", "5", true).await?,
            CoinflipOutcome::Denied(GameDenied::WrongChannel(channel)) if channel == "20"
        ));

        assert!(matches!(
            service.play_coinflip(1, "20", "5", true).await?,
            CoinflipOutcome::Played { .. }
        ));
        assert!(matches!(
            service.play_coinflip(1, "20", "5", true).await?,
            CoinflipOutcome::Denied(GameDenied::Cooldown(_))
        ));
        assert!(matches!(
            service.play_coinflip(1, "20", "6", true).await?,
            CoinflipOutcome::Played { .. }
        ));

        Ok(())
    }
}
