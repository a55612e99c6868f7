use super::*;

/// Tests inserting a run followed by its team.
///
/// Expected: the run gets an id and every team row references it
#[tokio::test]
async fn creates_run_then_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    let ids: Vec<u64> = users.iter().map(|u| u.user_id as u64).collect();

    let run = RunRepository::new(db)
        .create(guild.guild_id as u64, "zulrah", 61_200)
        .await
        .unwrap();
    let inserted = TeamRepository::new(db)
        .create_many(guild.guild_id as u64, run.id, &ids)
        .await
        .unwrap();

    assert_eq!(inserted, 2);
    let team = TeamRepository::new(db).get_by_run_ids(&[run.id]).await.unwrap();
    assert_eq!(team.len(), 2);
    assert!(team.iter().all(|t| t.run_id == run.id));

    Ok(())
}

/// Tests adding an unregistered user to a team.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn rejects_team_member_not_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let run = RunRepository::new(db)
        .create(guild.guild_id as u64, "zulrah", 61_200)
        .await
        .unwrap();

    let fault = TeamRepository::new(db)
        .create_many(guild.guild_id as u64, run.id, &[999_999])
        .await
        .unwrap_err();

    assert!(fault.classification.is_foreign_key_violation());

    Ok(())
}
