use super::*;

/// Tests that upserting an existing source replaces its value.
///
/// Expected: Ok with the new value and still a single source
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_point_source(db, guild.guild_id, "split_high", 50).await?;

    let repo = PointSourceRepository::new(db);
    let source = repo
        .upsert(&UpsertPointSourceParams {
            guild_id: guild.guild_id as u64,
            source: "split_high".to_string(),
            points: 75,
        })
        .await
        .unwrap();

    assert_eq!(source.points, 75);
    assert_eq!(repo.get_by_guild(guild.guild_id as u64).await.unwrap().len(), 1);

    Ok(())
}

/// Tests upserting a new source.
///
/// Expected: Ok with the source created
#[tokio::test]
async fn creates_missing_source() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = PointSourceRepository::new(db);
    repo.upsert(&UpsertPointSourceParams {
        guild_id: guild.guild_id as u64,
        source: "event_participation".to_string(),
        points: 10,
    })
    .await
    .unwrap();

    let found = repo
        .find(guild.guild_id as u64, "event_participation")
        .await
        .unwrap();
    assert_eq!(found.map(|s| s.points), Some(10));

    Ok(())
}
