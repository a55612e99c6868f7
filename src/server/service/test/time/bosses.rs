use super::*;

/// Tests listing tracked bosses with their best run and team.
///
/// Expected: the boss with a best carries its run and team, the other has none
#[tokio::test]
async fn lists_bosses_with_best_run() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    let team: Vec<i64> = users.iter().map(|u| u.user_id).collect();
    let best = factory::create_run(db, guild.guild_id, "vorkath", 50_000, &team).await?;
    factory::create_guild_boss_with_pb(db, guild.guild_id, "vorkath", Some(best.id)).await?;
    factory::create_guild_boss(db, guild.guild_id, "zulrah").await?;

    let mut bosses = TimeService::new(db).bosses(guild.guild_id as u64).await?;
    bosses.sort_by(|a, b| a.boss_name.cmp(&b.boss_name));

    assert_eq!(bosses.len(), 2);
    let vorkath = bosses[0].personal_best.as_ref().unwrap();
    assert_eq!(vorkath.id, best.id);
    let mut expected: Vec<u64> = team.iter().map(|id| *id as u64).collect();
    expected.sort_unstable();
    assert_eq!(vorkath.team, expected);
    assert!(bosses[1].personal_best.is_none());

    Ok(())
}

/// Tests that tracking normalizes the name and is idempotent.
///
/// Expected: both calls return the same lowercase boss and its best is kept
#[tokio::test]
async fn track_normalizes_and_keeps_best() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;
    let best = factory::create_run(db, guild.guild_id, "zulrah", 45_000, &[user.user_id]).await?;
    factory::create_guild_boss_with_pb(db, guild.guild_id, "zulrah", Some(best.id)).await?;

    let boss = TimeService::new(db)
        .track(guild.guild_id as u64, "  Zulrah ")
        .await?;

    assert_eq!(boss.boss_name, "zulrah");
    assert_eq!(boss.personal_best.map(|r| r.id), Some(best.id));

    Ok(())
}

/// Tests untracking a boss that is not tracked.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn untrack_unknown_boss_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let result = TimeService::new(db)
        .untrack(guild.guild_id as u64, "zulrah")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
