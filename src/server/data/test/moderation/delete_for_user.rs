use super::*;

/// Tests clearing the warnings of one user.
///
/// Expected: Ok(2) with other users' warnings kept
#[tokio::test]
async fn deletes_only_that_users_warnings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation::WarningFactory::new(db, "1", "10").build().await?;
    factory::moderation::WarningFactory::new(db, "1", "10").build().await?;
    factory::moderation::WarningFactory::new(db, "1", "11").build().await?;

    let repo = WarningRepository::new(db);
    assert_eq!(repo.delete_for_user(1, "10").await?, 2);
    assert_eq!(repo.count(1).await?, 1);

    Ok(())
}
