use super::*;

/// Tests leaderboard ordering and guild isolation.
///
/// Expected: Ok with members of the guild sorted by XP, limited
#[tokio::test]
async fn orders_by_xp_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member_with_xp(db, "1", 50).await?;
    let top = factory::create_member_with_xp(db, "1", 500).await?;
    let second = factory::create_member_with_xp(db, "1", 200).await?;
    factory::create_member_with_xp(db, "2", 10_000).await?;

    let repo = MemberRepository::new(db);
    let leaderboard = repo.leaderboard(1, 2).await?;

    let users: Vec<&str> = leaderboard.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(users, vec![top.user_id.as_str(), second.user_id.as_str()]);
    assert_eq!(repo.count(1).await?, 3);
    assert_eq!(repo.rank(1, 200).await?, 2);

    Ok(())
}
