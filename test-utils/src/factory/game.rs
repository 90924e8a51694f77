//! Game record factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a game record of the given type.
///
/// Finished games get `ended_at` set to now and `winner_id` set to the first player.
pub async fn create_game(
    db: &DatabaseConnection,
    guild_id: &str,
    game_type: &str,
    players: &[&str],
    active: bool,
) -> Result<entity::game::Model, DbErr> {
    let winner_id = if active {
        None
    } else {
        players.first().map(|p| p.to_string())
    };

    entity::game::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        game_type: ActiveValue::Set(game_type.to_string()),
        players: ActiveValue::Set(serde_json::to_string(players).unwrap_or_default()),
        winner_id: ActiveValue::Set(winner_id),
        active: ActiveValue::Set(active),
        created_at: ActiveValue::Set(Utc::now()),
        ended_at: ActiveValue::Set(if active { None } else { Some(Utc::now()) }),
        ..Default::default()
    }
    .insert(db)
    .await
}
