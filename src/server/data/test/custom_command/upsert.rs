use super::*;

/// Tests creating a new command.
///
/// Expected: Ok with zero uses and the creator stored
#[tokio::test]
async fn creates_command() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomCommand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomCommandRepository::new(db);
    let command = repo
        .upsert(
            1,
            UpsertCustomCommandParam {
                name: "rules".to_string(),
                response: "Be nice".to_string(),
                created_by: "dashboard".to_string(),
            },
        )
        .await?;

    assert_eq!(command.name, "rules");
    assert_eq!(command.uses, 0);
    assert_eq!(command.created_by, "dashboard");

    Ok(())
}

/// Tests that upserting an existing name replaces only the response.
///
/// Expected: Ok with the same id, new response and usage counter kept
#[tokio::test]
async fn updates_existing_command() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomCommand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::custom_command::CustomCommandFactory::new(db, "1")
        .name("rules")
        .uses(7)
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let command = repo
        .upsert(
            1,
            UpsertCustomCommandParam {
                name: "rules".to_string(),
                response: "Updated".to_string(),
                created_by: "dashboard".to_string(),
            },
        )
        .await?;

    assert_eq!(command.id, existing.id);
    assert_eq!(command.response, "Updated");
    assert_eq!(command.uses, 7);
    assert_eq!(repo.count(1).await?, 1);

    Ok(())
}
