use super::*;

/// Tests that an alias can only be removed by its owner.
///
/// Expected: Ok(0) for another user, Ok(1) for the owner
#[tokio::test]
async fn deletes_only_owned_alias() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let owner = factory::create_user(db, guild.guild_id).await?;
    let other = factory::create_user(db, guild.guild_id).await?;
    factory::create_rsn(db, guild.guild_id, owner.user_id, "Zezima").await?;

    let repo = RsnRepository::new(db);
    let guild_id = guild.guild_id as u64;

    assert_eq!(repo.delete(guild_id, other.user_id as u64, "Zezima").await.unwrap(), 0);
    assert_eq!(repo.delete(guild_id, owner.user_id as u64, "Zezima").await.unwrap(), 1);
    assert!(repo.get_by_guild(guild_id).await.unwrap().is_empty());

    Ok(())
}
