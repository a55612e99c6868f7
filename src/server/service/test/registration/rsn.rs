use super::*;
use crate::server::data::rsn::RsnRepository;

fn alias(guild_id: i64, user_id: i64, rsn: &str) -> AddRsnParams {
    AddRsnParams {
        guild_id: guild_id as u64,
        user_id: user_id as u64,
        rsn: rsn.to_string(),
        wom_id: None,
    }
}

/// Tests adding an alias another user already holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn alias_taken_by_another_user_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    let service = RsnService::new(db);

    service
        .add(alias(guild.guild_id, users[0].user_id, "Zezima"))
        .await?;
    let result = service
        .add(alias(guild.guild_id, users[1].user_id, "Zezima"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests adding an alias that differs from a linked one only in capitalization.
///
/// Expected: Err(Conflict) and the guild keeps a single alias
#[tokio::test]
async fn alias_differing_only_in_case_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    let service = RsnService::new(db);

    service
        .add(alias(guild.guild_id, users[0].user_id, "Zezima"))
        .await?;
    let other_user = service
        .add(alias(guild.guild_id, users[1].user_id, "zezima"))
        .await;
    let same_user = service
        .add(alias(guild.guild_id, users[0].user_id, "ZEZIMA"))
        .await;

    assert!(matches!(other_user, Err(AppError::Conflict(_))));
    assert!(matches!(same_user, Err(AppError::Conflict(_))));

    let linked = RsnRepository::new(db)
        .get_by_guild(guild.guild_id as u64)
        .await?;
    assert_eq!(linked.len(), 1);

    Ok(())
}

/// Tests adding an alias for a user who is not registered.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn alias_for_unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let result = RsnService::new(db)
        .add(alias(guild.guild_id, 999_999, "Zezima"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a malformed alias is rejected.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_overlong_alias() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;

    let result = RsnService::new(db)
        .add(alias(guild.guild_id, user.user_id, "ThirteenChars"))
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
