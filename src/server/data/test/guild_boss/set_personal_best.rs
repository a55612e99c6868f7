use super::*;

/// Tests moving the personal-best pointer of a tracked boss.
///
/// Expected: Ok(1) and the row points at the run
#[tokio::test]
async fn moves_pointer_for_tracked_boss() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 1, 0).await?;
    factory::create_guild_boss(db, guild.guild_id, "zulrah").await?;
    let run = factory::create_run(db, guild.guild_id, "zulrah", 60_000, &[users[0].user_id]).await?;

    let repo = GuildBossRepository::new(db);
    let affected = repo
        .set_personal_best(guild.guild_id as u64, "zulrah", run.id)
        .await
        .unwrap();

    assert_eq!(affected, 1);
    let boss = repo.find(guild.guild_id as u64, "zulrah").await.unwrap().unwrap();
    assert_eq!(boss.pb_run_id, Some(run.id));

    Ok(())
}

/// Tests moving the pointer for a boss the guild does not track.
///
/// Expected: Ok(0), nothing to update
#[tokio::test]
async fn affects_nothing_for_untracked_boss() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 1, 0).await?;
    let run = factory::create_run(db, guild.guild_id, "zulrah", 60_000, &[users[0].user_id]).await?;

    let repo = GuildBossRepository::new(db);
    let affected = repo
        .set_personal_best(guild.guild_id as u64, "zulrah", run.id)
        .await
        .unwrap();

    assert_eq!(affected, 0);

    Ok(())
}
