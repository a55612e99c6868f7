use super::*;

/// Tests crediting several users in one statement.
///
/// Expected: every user's balance increases by the delta and the affected count
/// matches the number of ids
#[tokio::test]
async fn credits_every_listed_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 3, 100).await?;
    let ids: Vec<u64> = users.iter().map(|u| u.user_id as u64).collect();

    let repo = UserRepository::new(db);
    let affected = repo.add_points(guild.guild_id as u64, &ids, 50).await.unwrap();

    assert_eq!(affected, 3);
    for user in repo.get_by_ids(guild.guild_id as u64, &ids).await.unwrap() {
        assert_eq!(user.points, 150);
    }

    Ok(())
}

/// Tests that ids not registered in the guild are not counted.
///
/// Expected: affected count covers only existing users
#[tokio::test]
async fn skips_unknown_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 10).await?;

    let repo = UserRepository::new(db);
    let affected = repo
        .add_points(guild.guild_id as u64, &[user.user_id as u64, 999_999], 5)
        .await
        .unwrap();

    assert_eq!(affected, 1);

    Ok(())
}

/// Tests that a debit never takes a balance below zero.
///
/// Expected: only the user whose balance covers the debit is updated
#[tokio::test]
async fn debit_skips_users_without_enough_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let rich = factory::create_user_with_points(db, guild.guild_id, 30).await?;
    let poor = factory::create_user_with_points(db, guild.guild_id, 10).await?;

    let repo = UserRepository::new(db);
    let affected = repo
        .add_points(
            guild.guild_id as u64,
            &[rich.user_id as u64, poor.user_id as u64],
            -20,
        )
        .await
        .unwrap();

    assert_eq!(affected, 1);

    let rich = entity::prelude::User::find_by_id((guild.guild_id, rich.user_id))
        .one(db)
        .await?
        .unwrap();
    let poor = entity::prelude::User::find_by_id((guild.guild_id, poor.user_id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(rich.points, 10);
    assert_eq!(poor.points, 10);

    Ok(())
}

/// Tests that users in another guild are never touched.
///
/// Expected: the same user id in a different guild keeps its balance
#[tokio::test]
async fn is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 0).await?;
    factory::user::UserFactory::new(db, other.guild_id)
        .user_id(user.user_id)
        .points(7)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.add_points(guild.guild_id as u64, &[user.user_id as u64], 3)
        .await
        .unwrap();

    let untouched = entity::prelude::User::find_by_id((other.guild_id, user.user_id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched.points, 7);

    Ok(())
}
