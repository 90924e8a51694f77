use super::*;

/// Tests saving settings for an existing guild.
///
/// Expected: Ok with the new document returned and persisted
#[tokio::test]
async fn replaces_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let created = repo.get_or_create(5).await?;

    let mut settings = created.settings.clone();
    settings.prefix = "?".to_string();
    settings.admin_roles = vec!["10".to_string()];

    let saved = repo.save(5, &settings).await?;
    assert_eq!(saved.settings.prefix, "?");
    assert!(saved.updated_at >= created.updated_at);

    let reloaded = repo.find(5).await?.unwrap();
    assert_eq!(reloaded.settings.admin_roles, vec!["10".to_string()]);

    Ok(())
}

/// Tests that saving creates the row when the guild is new.
///
/// Expected: Ok and the guild listed by get_all
#[tokio::test]
async fn inserts_missing_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.save(9, &GuildSettings::default()).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].guild_id, 9);

    Ok(())
}
