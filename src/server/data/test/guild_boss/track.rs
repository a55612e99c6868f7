use super::*;

/// Tests that tracking an already tracked boss keeps its personal best.
///
/// Expected: Ok with the existing pointer intact
#[tokio::test]
async fn tracking_twice_keeps_personal_best() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 1, 0).await?;
    let run = factory::create_run(db, guild.guild_id, "vorkath", 90_000, &[users[0].user_id]).await?;
    factory::create_guild_boss_with_pb(db, guild.guild_id, "vorkath", Some(run.id)).await?;

    let repo = GuildBossRepository::new(db);
    let boss = repo.track(guild.guild_id as u64, "vorkath").await.unwrap();

    assert_eq!(boss.pb_run_id, Some(run.id));
    assert_eq!(repo.get_by_guild(guild.guild_id as u64).await.unwrap().len(), 1);

    Ok(())
}

/// Tests untracking a boss.
///
/// Expected: Ok(1) then the boss is gone while its runs remain
#[tokio::test]
async fn untrack_keeps_runs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 1, 0).await?;
    let run = factory::create_run(db, guild.guild_id, "vorkath", 90_000, &[users[0].user_id]).await?;
    factory::create_guild_boss_with_pb(db, guild.guild_id, "vorkath", Some(run.id)).await?;

    let repo = GuildBossRepository::new(db);
    let removed = repo.untrack(guild.guild_id as u64, "vorkath").await.unwrap();

    assert_eq!(removed, 1);
    assert!(repo.find(guild.guild_id as u64, "vorkath").await.unwrap().is_none());
    assert!(
        crate::server::data::run::RunRepository::new(db)
            .find_by_id(run.id)
            .await
            .unwrap()
            .is_some()
    );

    Ok(())
}
