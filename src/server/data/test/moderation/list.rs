use super::*;

/// Tests listing warnings newest first with an optional user filter.
///
/// Expected: Ok with all guild warnings, then only the filtered user's
#[tokio::test]
async fn lists_newest_first_and_filters_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation::WarningFactory::new(db, "1", "10")
        .reason("old")
        .minutes_ago(30)
        .build()
        .await?;
    factory::moderation::WarningFactory::new(db, "1", "20")
        .reason("new")
        .build()
        .await?;
    factory::moderation::WarningFactory::new(db, "2", "10").build().await?;

    let repo = WarningRepository::new(db);

    let all = repo.list(1, None).await?;
    let reasons: Vec<&str> = all.iter().map(|w| w.reason.as_str()).collect();
    assert_eq!(reasons, vec!["new", "old"]);

    let filtered = repo.list(1, Some("10")).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].user_id, "10");

    Ok(())
}

/// Tests storing a warning.
///
/// Expected: Ok and the warning counted for the guild
#[tokio::test]
async fn creates_warning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let warning = repo
        .create(
            4,
            &ModerationActionParam {
                user_id: "5".to_string(),
                moderator_id: "6".to_string(),
                reason: "Caps".to_string(),
            },
        )
        .await?;

    assert_eq!(warning.guild_id, 4);
    assert_eq!(warning.reason, "Caps");
    assert_eq!(repo.count(4).await?, 1);

    Ok(())
}
