use super::*;

/// Tests incrementing and resetting the warning counter.
///
/// Expected: Ok with counts 1, 2 then 0 after reset
#[tokio::test]
async fn increments_and_resets_warnings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert_eq!(repo.increment_warnings(1, "9").await?, 1);
    assert_eq!(repo.increment_warnings(1, "9").await?, 2);

    repo.reset_warnings(1, "9").await?;

    let member = repo.find(1, "9").await?.unwrap();
    assert_eq!(member.warnings, 0);

    Ok(())
}
