use super::*;

/// Tests that the log is returned newest first and limited.
///
/// Expected: Ok with the two most recent actions
#[tokio::test]
async fn returns_latest_actions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation::ModLogFactory::new(db, "1")
        .action("ban")
        .minutes_ago(60)
        .build()
        .await?;
    factory::moderation::ModLogFactory::new(db, "1")
        .action("kick")
        .minutes_ago(10)
        .build()
        .await?;

    let repo = ModLogRepository::new(db);
    repo.create(
        1,
        "warn",
        &ModerationActionParam {
            user_id: "3".to_string(),
            moderator_id: "4".to_string(),
            reason: "Spam".to_string(),
        },
    )
    .await?;

    let logs = repo.list_recent(1, 2).await?;
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["warn", "kick"]);

    Ok(())
}
