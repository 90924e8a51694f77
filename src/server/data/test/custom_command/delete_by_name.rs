use super::*;

/// Tests deleting commands by name within a guild.
///
/// Expected: Ok(true) once, then Ok(false), other guilds untouched
#[tokio::test]
async fn deletes_command_of_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomCommand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command(db, "1", "hello").await?;
    factory::create_command(db, "2", "hello").await?;

    let repo = CustomCommandRepository::new(db);
    assert!(repo.delete_by_name(1, "hello").await?);
    assert!(!repo.delete_by_name(1, "hello").await?);
    assert!(repo.find_by_name(2, "hello").await?.is_some());

    Ok(())
}
