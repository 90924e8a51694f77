use super::*;

/// Tests that deleting a user also removes their tokens.
///
/// Expected: Ok(true), no user and no tokens left
#[tokio::test]
async fn deletes_user_and_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _token) = factory::helpers::create_user_with_token(db, false).await?;
    factory::create_token(db, user.id).await?;

    let repo = DashboardUserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert_eq!(entity::prelude::DashboardUser::find().count(db).await?, 0);
    assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DashboardUserRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}
