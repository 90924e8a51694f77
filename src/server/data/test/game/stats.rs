use super::*;

/// Tests game statistics of a guild.
///
/// Expected: Ok with totals and the player with the most wins
#[tokio::test]
async fn counts_games_and_top_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game(db, "1", "coinflip", &["111111111111"], false).await?;
    factory::game::create_game(db, "1", "coinflip", &["111111111111"], false).await?;
    factory::game::create_game(db, "1", "coinflip", &["222222222222"], false).await?;
    factory::game::create_game(db, "1", "trivia", &["333", "444"], true).await?;
    factory::game::create_game(db, "2", "coinflip", &["999"], false).await?;

    let repo = GameRepository::new(db);
    let stats = repo.stats(1).await?;

    assert_eq!(stats.total_games, 4);
    assert_eq!(stats.active_games, 1);
    assert_eq!(stats.top_player.as_deref(), Some("111111111111"));
    assert_eq!(
        stats.into_dto().top_player.as_deref(),
        Some("11111111...")
    );

    Ok(())
}

/// Tests statistics of a guild without games.
///
/// Expected: Ok with zero counts and no top player
#[tokio::test]
async fn empty_guild_has_no_top_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let stats = repo.stats(1).await?;

    assert_eq!(stats.total_games, 0);
    assert!(stats.top_player.is_none());

    Ok(())
}
