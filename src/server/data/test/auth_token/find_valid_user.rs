use super::*;

/// Tests resolving a valid token to its user.
///
/// Expected: Ok(Some) with the token owner
#[tokio::test]
async fn resolves_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_user_with_token(db, false).await?;

    let repo = AuthTokenRepository::new(db);
    let found = repo.find_valid_user(&token.token, Utc::now()).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that expired tokens are not accepted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::auth_token::AuthTokenFactory::new(db, user.id)
        .expires_in(Duration::minutes(-1))
        .build()
        .await?;

    let repo = AuthTokenRepository::new(db);
    assert!(repo.find_valid_user(&token.token, Utc::now()).await?.is_none());

    Ok(())
}

/// Tests that unknown and revoked tokens are not accepted.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn rejects_unknown_and_revoked_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, token) = factory::helpers::create_user_with_token(db, true).await?;

    let repo = AuthTokenRepository::new(db);
    assert!(repo.find_valid_user("missing", Utc::now()).await?.is_none());

    assert!(repo.delete(&token.token).await?);
    assert!(repo.find_valid_user(&token.token, Utc::now()).await?.is_none());

    Ok(())
}
