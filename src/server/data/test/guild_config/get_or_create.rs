use super::*;

/// Tests that an unknown guild gets the default configuration.
///
/// Expected: Ok with defaults and exactly one stored row after two calls
#[tokio::test]
async fn creates_default_config_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create(1234).await?;
    repo.get_or_create(1234).await?;

    assert_eq!(config.guild_id, 1234);
    assert_eq!(config.settings, GuildSettings::default());
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);

    Ok(())
}

/// Tests reading a stored document that lacks newer fields.
///
/// Expected: Ok with stored values kept and missing ones defaulted
#[tokio::test]
async fn fills_missing_fields_from_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::guild_config::ActiveModel {
        guild_id: ActiveValue::Set("77".to_string()),
        data: ActiveValue::Set(r#"{"language":"en","xp_per_message":20}"#.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        updated_at: ActiveValue::Set(Utc::now()),
        last_server_sync: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_or_create(77).await?;

    assert_eq!(config.settings.language, "en");
    assert_eq!(config.settings.xp_per_message, 20);
    assert_eq!(config.settings.prefix, "!");
    assert_eq!(config.settings.warn_threshold, 3);

    Ok(())
}
