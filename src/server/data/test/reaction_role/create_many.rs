use super::*;

/// Tests creating one row per role of a panel.
///
/// Verifies that shared panel fields are copied to every row and that rows start
/// with the pending message id.
///
/// Expected: Ok with two rows in entry order
#[tokio::test]
async fn creates_row_per_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    let created = repo
        .create_many(
            1,
            CreateReactionRolesParam {
                channel_id: "10".to_string(),
                title: "Pick roles".to_string(),
                description: String::new(),
                kind: "button".to_string(),
                color: "#5865F2".to_string(),
                roles: vec![
                    ReactionRoleEntryDto {
                        emoji: "🔴".to_string(),
                        role_id: "100".to_string(),
                        label: "Red".to_string(),
                    },
                    ReactionRoleEntryDto {
                        emoji: "🔵".to_string(),
                        role_id: "200".to_string(),
                        label: "Blue".to_string(),
                    },
                ],
            },
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert!(created
        .iter()
        .all(|r| r.message_id == PENDING_MESSAGE_ID && r.title == "Pick roles"));
    assert_eq!(created[0].role_id, "100");
    assert_eq!(created[1].label, "Blue");
    assert_eq!(repo.get_all(1).await?.len(), 2);

    Ok(())
}
