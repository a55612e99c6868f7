use super::*;

/// Tests registering the same guild twice.
///
/// Expected: Err(Conflict) on the second call
#[tokio::test]
async fn duplicate_guild_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildService::new(db);
    let params = CreateGuildParams {
        guild_id: 4242,
        multiplier: 1.0,
        pb_channel_id: None,
    };

    service.create(params.clone()).await?;
    let result = service.create(params).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a non-positive multiplier is rejected.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_non_positive_multiplier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildService::new(db)
        .create(CreateGuildParams {
            guild_id: 4243,
            multiplier: 0.0,
            pb_channel_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}

/// Tests deleting a guild that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_guild_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildService::new(db).delete(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
