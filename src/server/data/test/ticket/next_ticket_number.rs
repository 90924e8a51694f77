use super::*;

/// Tests sequential ticket numbering per panel.
///
/// Expected: Ok(Some) with numbers following the stored counter
#[tokio::test]
async fn increments_panel_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TicketPanel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::ticket::TicketPanelFactory::new(db, "1")
        .ticket_counter(4)
        .build()
        .await?;

    let repo = TicketPanelRepository::new(db);
    assert_eq!(repo.next_ticket_number(panel.id).await?, Some(5));
    assert_eq!(repo.next_ticket_number(panel.id).await?, Some(6));
    assert_eq!(repo.next_ticket_number(panel.id + 1).await?, None);

    repo.set_message_id(panel.id, "888").await?;
    let stored = repo.find(1, panel.id).await?.unwrap();
    assert_eq!(stored.message_id.as_deref(), Some("888"));
    assert_eq!(stored.ticket_counter, 6);

    Ok(())
}
