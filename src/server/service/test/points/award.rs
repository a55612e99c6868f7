use super::*;

/// Tests awarding a named source to one user.
///
/// Expected: balance 100 becomes 150 and the update reports given 50
#[tokio::test]
async fn credits_source_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 100).await?;
    factory::create_point_source(db, guild.guild_id, "split_high", 50).await?;

    let update = PointsService::new(db)
        .award(AwardPointsParams {
            guild_id: guild.guild_id as u64,
            user_ids: vec![user.user_id as u64],
            source: "split_high".to_string(),
        })
        .await?;

    assert_eq!(update.given, 50);
    assert_eq!(update.users.len(), 1);
    assert_eq!(update.users[0].user_id, user.user_id as u64);
    assert_eq!(update.users[0].points, 150);
    assert_eq!(balance(db, guild.guild_id, user.user_id).await, 150);

    Ok(())
}

/// Tests that a user listed twice is credited twice.
///
/// Expected: the repeated user gains double, the other user gains once, and balances
/// are reported once per user in request order
#[tokio::test]
async fn credits_repeated_ids_per_occurrence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    factory::create_point_source(db, guild.guild_id, "clue", 10).await?;
    let (a, b) = (users[0].user_id as u64, users[1].user_id as u64);

    let update = PointsService::new(db)
        .award(AwardPointsParams {
            guild_id: guild.guild_id as u64,
            user_ids: vec![b, a, b],
            source: "clue".to_string(),
        })
        .await?;

    let reported: Vec<(u64, i64)> = update.users.iter().map(|u| (u.user_id, u.points)).collect();
    assert_eq!(reported, vec![(b, 20), (a, 10)]);

    Ok(())
}

/// Tests that one unregistered id fails the whole award.
///
/// Expected: Err(UsersNotFound) naming the missing id and no balance changed
#[tokio::test]
async fn unknown_user_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 100).await?;
    factory::create_point_source(db, guild.guild_id, "split_high", 50).await?;

    let result = PointsService::new(db)
        .award(AwardPointsParams {
            guild_id: guild.guild_id as u64,
            user_ids: vec![users[0].user_id as u64, 424_242, users[1].user_id as u64],
            source: "split_high".to_string(),
        })
        .await;

    match result {
        Err(AppError::PointsErr(PointsError::UsersNotFound { missing, .. })) => {
            assert_eq!(missing, vec![424_242]);
        }
        other => panic!("expected UsersNotFound, got {:?}", other),
    }

    for user in &users {
        assert_eq!(balance(db, guild.guild_id, user.user_id).await, 100);
    }

    Ok(())
}

/// Tests awarding a source the guild does not define.
///
/// Expected: Err(SourceNotFound)
#[tokio::test]
async fn unknown_source_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;

    let result = PointsService::new(db)
        .award(AwardPointsParams {
            guild_id: guild.guild_id as u64,
            user_ids: vec![user.user_id as u64],
            source: "nope".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::PointsErr(PointsError::SourceNotFound { .. }))
    ));

    Ok(())
}

/// Tests that a malformed source name is rejected before any store access.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_malformed_source_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PointsService::new(db)
        .award(AwardPointsParams {
            guild_id: 1,
            user_ids: vec![1],
            source: "Split High".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
