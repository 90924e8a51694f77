use super::*;

/// Tests creating a panel from a payload with only a channel.
///
/// Expected: Ok with every default applied and JSON lists empty
#[tokio::test]
async fn creates_panel_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TicketPanel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketPanelRepository::new(db);
    let panel = repo
        .create(
            1,
            CreateTicketPanelParam::from(CreateTicketPanelDto {
                channel_id: "500".to_string(),
                ..Default::default()
            }),
        )
        .await?;

    assert_eq!(panel.title, "🎫 Support Tickets");
    assert_eq!(panel.ticket_name_template, "ticket-{number}");
    assert_eq!(panel.ticket_counter, 0);
    assert!(panel.claim_enabled);
    assert!(panel.categories.is_empty());
    assert!(panel.message_id.is_none());

    Ok(())
}

/// Tests that JSON list columns survive an update round trip.
///
/// Expected: Ok(Some) with categories and support roles stored
#[tokio::test]
async fn updates_json_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TicketPanel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::ticket::TicketPanelFactory::new(db, "1").build().await?;

    let repo = TicketPanelRepository::new(db);
    let updated = repo
        .update(
            1,
            panel.id,
            UpdateTicketPanelDto {
                categories: Some(vec![TicketCategoryDto {
                    name: "Billing".to_string(),
                    emoji: "💳".to_string(),
                    description: String::new(),
                }]),
                support_roles: Some(vec!["7".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.categories[0].name, "Billing");
    assert_eq!(updated.support_roles, vec!["7".to_string()]);

    let reloaded = repo.find(1, panel.id).await?.unwrap();
    assert_eq!(reloaded.categories.len(), 1);
    assert!(repo.find(2, panel.id).await?.is_none());

    Ok(())
}
