use super::*;

fn custom(guild_id: i64, user_ids: Vec<u64>, delta: i64) -> CustomPointsParams {
    CustomPointsParams {
        guild_id: guild_id as u64,
        user_ids,
        delta,
        reason: Some("test".to_string()),
    }
}

/// Tests that crediting an amount and then debiting it restores the balance.
///
/// Expected: balance returns to its starting value
#[tokio::test]
async fn credit_then_debit_restores_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 37).await?;
    let service = PointsService::new(db);

    let credited = service
        .award_custom(custom(guild.guild_id, vec![user.user_id as u64], 25))
        .await?;
    assert_eq!(credited.users[0].points, 62);

    let debited = service
        .award_custom(custom(guild.guild_id, vec![user.user_id as u64], -25))
        .await?;
    assert_eq!(debited.given, -25);
    assert_eq!(debited.users[0].points, 37);

    Ok(())
}

/// Tests a debit larger than one user's balance.
///
/// Expected: Err(InsufficientPoints) naming that user and no balance changed
#[tokio::test]
async fn debit_beyond_balance_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let rich = factory::create_user_with_points(db, guild.guild_id, 100).await?;
    let poor = factory::create_user_with_points(db, guild.guild_id, 10).await?;

    let result = PointsService::new(db)
        .award_custom(custom(
            guild.guild_id,
            vec![rich.user_id as u64, poor.user_id as u64],
            -20,
        ))
        .await;

    match result {
        Err(AppError::PointsErr(PointsError::InsufficientPoints { users, .. })) => {
            assert_eq!(users, vec![poor.user_id as u64]);
        }
        other => panic!("expected InsufficientPoints, got {:?}", other),
    }

    assert_eq!(balance(db, guild.guild_id, rich.user_id).await, 100);
    assert_eq!(balance(db, guild.guild_id, poor.user_id).await, 10);

    Ok(())
}

/// Tests that a repeated id multiplies the debit.
///
/// Expected: 30 points cannot cover two debits of 20
#[tokio::test]
async fn repeated_debit_counts_every_occurrence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 30).await?;
    let id = user.user_id as u64;

    let result = PointsService::new(db)
        .award_custom(custom(guild.guild_id, vec![id, id], -20))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PointsErr(PointsError::InsufficientPoints { .. }))
    ));
    assert_eq!(balance(db, guild.guild_id, user.user_id).await, 30);

    Ok(())
}

/// Tests a debit where one user is covered and a repeated user is not.
///
/// Expected: Err(InsufficientPoints) naming only the repeated user, no balance changed
#[tokio::test]
async fn mixed_debit_names_only_short_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let covered = factory::create_user_with_points(db, guild.guild_id, 100).await?;
    let repeated = factory::create_user_with_points(db, guild.guild_id, 30).await?;
    let repeated_id = repeated.user_id as u64;

    let result = PointsService::new(db)
        .award_custom(custom(
            guild.guild_id,
            vec![covered.user_id as u64, repeated_id, repeated_id],
            -20,
        ))
        .await;

    match result {
        Err(AppError::PointsErr(PointsError::InsufficientPoints { users, .. })) => {
            assert_eq!(users, vec![repeated_id]);
        }
        other => panic!("expected InsufficientPoints, got {:?}", other),
    }

    assert_eq!(balance(db, guild.guild_id, covered.user_id).await, 100);
    assert_eq!(balance(db, guild.guild_id, repeated.user_id).await, 30);

    Ok(())
}

/// Tests a credit whose second group names an unregistered user.
///
/// Expected: Err(UsersNotFound) naming only that user, the first group is undone
#[tokio::test]
async fn failed_later_group_undoes_earlier_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 10).await?;

    let result = PointsService::new(db)
        .award_custom(custom(
            guild.guild_id,
            vec![user.user_id as u64, 999, 999],
            5,
        ))
        .await;

    match result {
        Err(AppError::PointsErr(PointsError::UsersNotFound { missing, .. })) => {
            assert_eq!(missing, vec![999]);
        }
        other => panic!("expected UsersNotFound, got {:?}", other),
    }

    assert_eq!(balance(db, guild.guild_id, user.user_id).await, 10);

    Ok(())
}

/// Tests that a debit down to exactly zero is allowed.
///
/// Expected: Ok with balance 0
#[tokio::test]
async fn debit_to_zero_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user_with_points(db, guild.guild_id, 20).await?;

    let update = PointsService::new(db)
        .award_custom(custom(guild.guild_id, vec![user.user_id as u64], -20))
        .await?;

    assert_eq!(update.users[0].points, 0);

    Ok(())
}

/// Tests that a zero amount is rejected.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_zero_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PointsService::new(db)
        .award_custom(custom(1, vec![1], 0))
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
