use super::*;

/// Tests partially updating a reaction role.
///
/// Expected: Ok(Some) with the label changed and the rest kept
#[tokio::test]
async fn updates_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_reaction_role(db, "1").await?;

    let repo = ReactionRoleRepository::new(db);
    let updated = repo
        .update(
            1,
            existing.id,
            UpdateReactionRoleDto {
                label: Some("Gamer".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.label, "Gamer");
    assert_eq!(updated.emoji, existing.emoji);
    assert_eq!(updated.title, existing.title);

    let found = repo
        .find_by_message_emoji(&existing.message_id, &existing.emoji)
        .await?;
    assert_eq!(found.map(|r| r.id), Some(existing.id));

    Ok(())
}

/// Tests updating and deleting an unknown reaction role.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn reports_missing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    assert!(repo
        .update(1, 99, UpdateReactionRoleDto::default())
        .await?
        .is_none());
    assert!(!repo.delete(1, 99).await?);

    Ok(())
}
