use super::*;

/// Tests recording a finished game.
///
/// Expected: Ok with the game inactive and not listed as active
#[tokio::test]
async fn records_finished_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game(db, "1", "trivia", &["5"], true).await?;

    let repo = GameRepository::new(db);
    let game = repo
        .record(
            1,
            RecordGameParam {
                channel_id: "77".to_string(),
                game_type: "coinflip".to_string(),
                players: vec!["42".to_string()],
                winner_id: Some("42".to_string()),
            },
        )
        .await?;

    assert!(!game.active);
    assert!(game.ended_at.is_some());
    assert_eq!(game.players, vec!["42".to_string()]);

    let active = repo.get_active(1).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].game_type, "trivia");
    assert_eq!(repo.count_active(1).await?, 1);

    Ok(())
}
