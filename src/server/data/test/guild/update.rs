use super::*;

/// Tests replacing a guild's settings.
///
/// Expected: Ok(Some) with the new multiplier and channel
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild::GuildFactory::new(db)
        .pb_channel_id(Some(5))
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let updated = repo
        .update(&UpdateGuildParams {
            guild_id: guild.guild_id as u64,
            multiplier: 2.0,
            pb_channel_id: None,
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.multiplier, 2.0);
    assert_eq!(updated.pb_channel_id, None);

    Ok(())
}

/// Tests updating a guild that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let updated = repo
        .update(&UpdateGuildParams {
            guild_id: 404,
            multiplier: 2.0,
            pb_channel_id: None,
        })
        .await
        .unwrap();

    assert!(updated.is_none());

    Ok(())
}
