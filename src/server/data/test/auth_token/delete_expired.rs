use super::*;

/// Tests that only expired tokens are purged.
///
/// Expected: Ok(1) with the valid token kept
#[tokio::test]
async fn deletes_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::auth_token::AuthTokenFactory::new(db, user.id)
        .expires_in(Duration::days(-1))
        .build()
        .await?;
    factory::create_token(db, user.id).await?;

    let repo = AuthTokenRepository::new(db);
    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 1);

    Ok(())
}
