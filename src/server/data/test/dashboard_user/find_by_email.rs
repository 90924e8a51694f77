use super::*;

/// Tests that email lookups ignore case and surrounding whitespace.
///
/// Expected: Ok(Some) for a differently cased email
#[tokio::test]
async fn finds_user_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::dashboard_user::DashboardUserFactory::new(db)
        .email("carol@example.com")
        .build()
        .await?;

    let repo = DashboardUserRepository::new(db);
    let found = repo.find_by_email("  Carol@Example.COM ").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = DashboardUserRepository::new(db);
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
