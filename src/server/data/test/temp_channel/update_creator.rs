use super::*;

/// Tests partially updating a creator.
///
/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn applies_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempCreator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::temp_voice::TempCreatorFactory::new(db, "1")
        .name_template("{user}")
        .default_limit(4)
        .build()
        .await?;

    let repo = TempCreatorRepository::new(db);
    let updated = repo
        .update(
            1,
            creator.id,
            UpdateTempCreatorDto {
                default_limit: Some(8),
                allow_lock: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.default_limit, 8);
    assert!(!updated.allow_lock);
    assert_eq!(updated.name_template, "{user}");
    assert!(updated.allow_rename);

    Ok(())
}

/// Tests that creators of other guilds cannot be updated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TempCreator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::temp_voice::TempCreatorFactory::new(db, "1").build().await?;

    let repo = TempCreatorRepository::new(db);
    let result = repo
        .update(2, creator.id, UpdateTempCreatorDto::default())
        .await?;

    assert!(result.is_none());
    assert!(!repo.delete(2, creator.id).await?);

    Ok(())
}
