use super::*;

/// Tests listing rewards ordered by level.
///
/// Expected: Ok with levels ascending
#[tokio::test]
async fn lists_rewards_by_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::leveling::LevelRewardFactory::new(db, "1").level(10).build().await?;
    factory::leveling::LevelRewardFactory::new(db, "1").level(2).build().await?;

    let repo = LevelRewardRepository::new(db);
    repo.create(
        1,
        CreateLevelRewardParam {
            level: 5,
            reward_type: "role".to_string(),
            reward_value: "123".to_string(),
            reward_name: None,
        },
    )
    .await?;

    let levels: Vec<i32> = repo.get_all(1).await?.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![2, 5, 10]);

    Ok(())
}

/// Tests that disabled rewards are not granted.
///
/// Expected: Ok with the reward excluded after toggling off
#[tokio::test]
async fn toggled_off_rewards_are_skipped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LevelReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reward = factory::leveling::LevelRewardFactory::new(db, "1")
        .level(3)
        .reward("role", "555")
        .build()
        .await?;

    let repo = LevelRewardRepository::new(db);
    assert_eq!(repo.get_enabled_for_level(1, 3).await?.len(), 1);

    let updated = repo.set_enabled(1, reward.id, false).await?.unwrap();
    assert!(!updated.enabled);
    assert!(repo.get_enabled_for_level(1, 3).await?.is_empty());

    assert!(repo.set_enabled(1, 999, true).await?.is_none());
    assert!(repo.delete(1, reward.id).await?);

    Ok(())
}
