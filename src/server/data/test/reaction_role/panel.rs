use super::*;

fn panel_param(title: &str, roles: &[(&str, &str)]) -> CreateReactionRolesParam {
    CreateReactionRolesParam {
        channel_id: "10".to_string(),
        title: title.to_string(),
        description: String::new(),
        kind: "reaction".to_string(),
        color: "#5865F2".to_string(),
        roles: roles
            .iter()
            .map(|(emoji, role_id)| ReactionRoleEntryDto {
                emoji: emoji.to_string(),
                role_id: role_id.to_string(),
                label: String::new(),
            })
            .collect(),
    }
}

/// Tests that a panel is resolved from any of its rows.
///
/// Verifies rows of another panel in the same channel are left out.
///
/// Expected: Ok with both rows of the first panel
#[tokio::test]
async fn groups_rows_of_one_panel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    let colors = repo
        .create_many(1, panel_param("Colors", &[("🔴", "100"), ("🔵", "200")]))
        .await?;
    repo.create_many(1, panel_param("Games", &[("🎮", "300")]))
        .await?;

    let panel = repo.get_panel(1, colors[1].id).await?;
    let ids: Vec<i32> = panel.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![colors[0].id, colors[1].id]);

    assert!(repo.get_panel(2, colors[0].id).await?.is_empty());

    Ok(())
}

/// Tests that reactions resolve once the panel's message id is stored.
///
/// Expected: no match while pending, the row afterwards
#[tokio::test]
async fn posted_panel_matches_reactions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    let created = repo
        .create_many(1, panel_param("Colors", &[("🔴", "100"), ("🔵", "200")]))
        .await?;
    assert!(repo.find_by_message_emoji("555", "🔵").await?.is_none());

    let ids: Vec<i32> = created.iter().map(|row| row.id).collect();
    repo.set_message_id(&ids, "555").await?;

    let found = repo.find_by_message_emoji("555", "🔵").await?;
    assert_eq!(found.map(|row| row.role_id), Some("200".to_string()));
    assert!(repo
        .get_all(1)
        .await?
        .iter()
        .all(|row| row.message_id != PENDING_MESSAGE_ID));

    Ok(())
}
