use super::*;

/// Tests awarding message XP to an unknown member.
///
/// Verifies the member is created, the message is counted and the cooldown
/// timestamp is recorded.
///
/// Expected: Ok with xp 15, level 0 and one message
#[tokio::test]
async fn creates_member_on_first_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let now = Utc::now();
    let gain = repo.add_xp(1, "42", 15, now, true).await?;

    assert_eq!(gain.member.xp, 15);
    assert_eq!(gain.member.level, 0);
    assert_eq!(gain.member.messages, 1);
    assert!(gain.member.last_xp_at.is_some());
    assert!(!gain.leveled_up());

    Ok(())
}

/// Tests crossing a level boundary.
///
/// Expected: Ok with level 1 and leveled_up set
#[tokio::test]
async fn reports_level_up() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_member::GuildMemberFactory::new(db, "1")
        .user_id("42")
        .xp(90)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let gain = repo.add_xp(1, "42", 15, Utc::now(), true).await?;

    assert_eq!(gain.previous_level, 0);
    assert_eq!(gain.member.xp, 105);
    assert_eq!(gain.member.level, 1);
    assert!(gain.leveled_up());

    Ok(())
}

/// Tests that voice XP leaves the message counter and cooldown untouched.
///
/// Expected: Ok with messages unchanged and no last_xp_at
#[tokio::test]
async fn voice_xp_does_not_count_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let gain = repo.add_xp(1, "7", 25, Utc::now(), false).await?;

    assert_eq!(gain.member.xp, 25);
    assert_eq!(gain.member.messages, 0);
    assert!(gain.member.last_xp_at.is_none());

    Ok(())
}

/// Tests awarding XP to a member already at the top of the range.
///
/// Expected: Ok with xp pinned at i64::MAX and a finite level
#[tokio::test]
async fn saturates_at_maximum_xp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_member::GuildMemberFactory::new(db, "1")
        .user_id("42")
        .xp(i64::MAX - 5)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let gain = repo.add_xp(1, "42", 15, Utc::now(), true).await?;

    assert_eq!(gain.member.xp, i64::MAX);
    assert_eq!(gain.member.level, calculate_level(i64::MAX));

    Ok(())
}
