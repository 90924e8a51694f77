use super::*;

/// Tests creating a dashboard user.
///
/// Verifies that all provided fields are stored and an id is assigned.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DashboardUserRepository::new(db);
    let user = repo
        .create(CreateDashboardUserParam {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            is_admin: true,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_admin);

    let count = entity::prelude::DashboardUser::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that duplicate emails are rejected by the schema.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dashboard_user::DashboardUserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = DashboardUserRepository::new(db);
    let result = repo
        .create(CreateDashboardUserParam {
            username: "bob".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            is_admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
