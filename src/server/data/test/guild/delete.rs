use super::*;

/// Tests that deleting a guild removes its users and point sources.
///
/// Expected: Ok(1) and no owned rows left
#[tokio::test]
async fn deletes_guild_and_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _users) = factory::helpers::create_guild_with_users(db, 2, 10).await?;
    factory::create_point_source(db, guild.guild_id, "split_high", 50).await?;

    let repo = GuildRepository::new(db);
    let deleted = repo.delete(guild.guild_id as u64).await.unwrap();

    assert_eq!(deleted, 1);
    assert!(entity::prelude::User::find().all(db).await?.is_empty());
    assert!(entity::prelude::PointSource::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a guild that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert_eq!(repo.delete(404).await.unwrap(), 0);

    Ok(())
}
