use super::*;

/// Tests listing users in creation order.
///
/// Expected: Ok with users ordered oldest first
#[tokio::test]
async fn lists_users_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_user(db).await?;

    let repo = DashboardUserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(users[0].is_admin);
    assert!(!users[1].is_admin);

    Ok(())
}
