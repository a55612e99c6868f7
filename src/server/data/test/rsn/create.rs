use super::*;

fn params(guild_id: i64, user_id: i64, rsn: &str) -> AddRsnParams {
    AddRsnParams {
        guild_id: guild_id as u64,
        user_id: user_id as u64,
        rsn: rsn.to_string(),
        wom_id: None,
    }
}

/// Tests linking several aliases to one user.
///
/// Expected: Ok and both aliases listed for the user
#[tokio::test]
async fn links_multiple_aliases() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;

    let repo = RsnRepository::new(db);
    repo.create(&params(guild.guild_id, user.user_id, "Zezima")).await.unwrap();
    repo.create(&params(guild.guild_id, user.user_id, "Zezima Alt")).await.unwrap();

    let rsns = repo
        .get_by_user(guild.guild_id as u64, user.user_id as u64)
        .await
        .unwrap();
    assert_eq!(rsns.len(), 2);

    Ok(())
}

/// Tests linking an alias already taken in the guild.
///
/// Expected: Err classified as a unique violation
#[tokio::test]
async fn rejects_alias_taken_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let first = factory::create_user(db, guild.guild_id).await?;
    let second = factory::create_user(db, guild.guild_id).await?;
    factory::create_rsn(db, guild.guild_id, first.user_id, "Zezima").await?;

    let repo = RsnRepository::new(db);
    let fault = repo
        .create(&params(guild.guild_id, second.user_id, "Zezima"))
        .await
        .unwrap_err();

    assert!(fault.classification.is_unique_violation());

    Ok(())
}

/// Tests linking an alias to a user that is not registered.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = RsnRepository::new(db);
    let fault = repo
        .create(&params(guild.guild_id, 999_999, "Zezima"))
        .await
        .unwrap_err();

    assert!(fault.classification.is_foreign_key_violation());

    Ok(())
}
