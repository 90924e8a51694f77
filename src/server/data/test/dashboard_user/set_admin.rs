use super::*;

/// Tests granting admin status.
///
/// Expected: Ok(true) and the flag persisted
#[tokio::test]
async fn grants_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DashboardUserRepository::new(db);
    assert!(repo.set_admin(user.id, true).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.is_admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DashboardUserRepository::new(db);
    assert!(!repo.set_admin(9999, true).await?);

    Ok(())
}
