use super::*;

/// Tests storing and overwriting a setting.
///
/// Expected: Ok with the latest value returned
#[tokio::test]
async fn overwrites_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotSettingRepository::new(db);
    assert_eq!(repo.get("discord_token").await?, None);

    repo.set("discord_token", "first").await?;
    repo.set("discord_token", "second").await?;

    assert_eq!(repo.get("discord_token").await?, Some("second".to_string()));

    Ok(())
}
