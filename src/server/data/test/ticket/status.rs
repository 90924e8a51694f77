use super::*;

/// Tests claiming and closing tickets and the resulting stats.
///
/// Expected: Ok with one ticket per status
#[tokio::test]
async fn tracks_status_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ticket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_ticket(db, "1", None, "10", 1).await?;
    let claimed = factory::create_ticket(db, "1", None, "11", 2).await?;
    let closed = factory::create_ticket(db, "1", None, "12", 3).await?;
    factory::create_ticket(db, "2", None, "13", 1).await?;

    let repo = TicketRepository::new(db);
    let ticket = repo.claim(claimed.id, "99").await?;
    assert_eq!(ticket.status, TicketStatus::Claimed);
    assert_eq!(ticket.claimed_by.as_deref(), Some("99"));

    let ticket = repo.close(closed.id, "99", Utc::now()).await?;
    assert_eq!(ticket.status, TicketStatus::Closed);
    assert!(ticket.closed_at.is_some());

    let stats = repo.stats(1).await?;
    assert_eq!((stats.open, stats.claimed, stats.closed, stats.total), (1, 1, 1, 3));

    let open = repo.get_all(1, Some(TicketStatus::Open)).await?;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].user_id, "10");

    Ok(())
}
