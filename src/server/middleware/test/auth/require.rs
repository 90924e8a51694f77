use super::*;

/// Tests a valid token grants access without required permissions.
///
/// Expected: Ok(DashboardUser) matching the token owner
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_user_with_token(db, false).await?;
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert!(!result.is_admin);

    Ok(())
}

/// Tests admin permission is granted to administrators.
///
/// Expected: Ok(DashboardUser) with is_admin=true
#[tokio::test]
async fn grants_admin_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, token) = factory::helpers::create_user_with_token(db, true).await?;
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin);

    Ok(())
}

/// Tests admin permission is denied to regular users.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user id
#[tokio::test]
async fn denies_admin_access_to_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_user_with_token(db, false).await?;
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests requests without a header are rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests unknown tokens are rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = headers_with("Bearer not-a-real-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests expired tokens are rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::dashboard_user::DashboardUserFactory::new(db)
        .build()
        .await?;
    let token = factory::auth_token::AuthTokenFactory::new(db, user.id)
        .expires_in(Duration::hours(-1))
        .build()
        .await?;
    let headers = headers_with(&format!("Bearer {}", token.token));

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
