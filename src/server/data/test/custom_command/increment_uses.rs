use super::*;

/// Tests bumping the usage counter.
///
/// Expected: Ok with uses incremented by one per call
#[tokio::test]
async fn increments_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomCommand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let command = factory::create_command(db, "1", "ping").await?;

    let repo = CustomCommandRepository::new(db);
    repo.increment_uses(command.id).await?;
    repo.increment_uses(command.id).await?;

    let stored = repo.find_by_name(1, "ping").await?.unwrap();
    assert_eq!(stored.uses, command.uses + 2);

    Ok(())
}
