use sea_orm::TransactionTrait;

use super::*;
use crate::server::{data::run::RunRepository, service::time::keep_untracked};

/// Tests the first run on a tracked boss with no best yet.
///
/// Expected: the run becomes the personal best with no previous best
#[tokio::test]
async fn first_run_becomes_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    factory::create_guild_boss(db, guild.guild_id, "vorkath").await?;
    let team: Vec<i64> = users.iter().map(|u| u.user_id).collect();

    let submission = TimeService::new(db)
        .submit(run(guild.guild_id, "vorkath", 95_000, &team))
        .await?;

    assert!(submission.personal_best);
    assert!(submission.previous_best.is_none());
    assert_eq!(submission.run.duration_ms, 95_000);
    assert_eq!(submission.run.team.len(), 2);

    Ok(())
}

/// Tests that only a strictly faster run moves the personal best.
///
/// Expected: an equal and a slower run keep the best, a faster one replaces it, and
/// every run is persisted
#[tokio::test]
async fn only_strictly_faster_runs_move_the_best() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;
    factory::create_guild_boss(db, guild.guild_id, "vorkath").await?;
    let service = TimeService::new(db);

    let first = service
        .submit(run(guild.guild_id, "vorkath", 60_000, &[user.user_id]))
        .await?;
    assert!(first.personal_best);

    let equal = service
        .submit(run(guild.guild_id, "vorkath", 60_000, &[user.user_id]))
        .await?;
    assert!(!equal.personal_best);
    assert_eq!(equal.previous_best.map(|r| r.id), Some(first.run.id));

    let slower = service
        .submit(run(guild.guild_id, "vorkath", 61_000, &[user.user_id]))
        .await?;
    assert!(!slower.personal_best);

    let faster = service
        .submit(run(guild.guild_id, "vorkath", 59_999, &[user.user_id]))
        .await?;
    assert!(faster.personal_best);
    assert_eq!(faster.previous_best.map(|r| r.id), Some(first.run.id));

    let bosses = service.bosses(guild.guild_id as u64).await?;
    assert_eq!(
        bosses[0].personal_best.as_ref().map(|r| r.id),
        Some(faster.run.id)
    );

    let runs = service
        .list(guild.guild_id as u64, RunFilter::default())
        .await?;
    assert_eq!(runs.len(), 4);

    Ok(())
}

/// Tests a run on a boss the guild does not track.
///
/// Expected: Err(NotFound), yet the run and its team are stored and listed afterwards
#[tokio::test]
async fn untracked_boss_keeps_the_run() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;
    let service = TimeService::new(db);

    let result = service
        .submit(run(guild.guild_id, "zulrah", 70_000, &[user.user_id]))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let runs = service
        .list(
            guild.guild_id as u64,
            RunFilter {
                boss_name: Some("zulrah".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].duration_ms, 70_000);
    assert_eq!(runs[0].team, vec![user.user_id as u64]);

    Ok(())
}

/// Tests the commit applied when the boss turns out to be untracked mid-submission.
///
/// Expected: Err(NotFound) and the run written in the transaction is kept
#[tokio::test]
async fn boss_untracked_during_submission_keeps_the_run() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let params = run(guild.guild_id, "vorkath", 90_000, &[]);

    let txn = db.begin().await?;
    let stored = RunRepository::new(&txn)
        .create(params.guild_id, &params.boss_name, params.duration_ms)
        .await?;

    let err = keep_untracked(txn, &params, stored.id).await;
    assert!(matches!(err, AppError::NotFound(_)));

    let runs = TimeService::new(db)
        .list(params.guild_id, RunFilter::default())
        .await?;
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].id, stored.id);

    Ok(())
}

/// Tests a team member who is not registered in the guild.
///
/// Expected: Err(NotFound) and no run stored
#[tokio::test]
async fn unknown_team_member_stores_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db, guild.guild_id).await?;
    factory::create_guild_boss(db, guild.guild_id, "vorkath").await?;
    let service = TimeService::new(db);

    let result = service
        .submit(run(guild.guild_id, "vorkath", 80_000, &[user.user_id, 777_777]))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let runs = service
        .list(guild.guild_id as u64, RunFilter::default())
        .await?;
    assert!(runs.is_empty());

    Ok(())
}

/// Tests that a non-positive duration is rejected.
///
/// Expected: Err(ValidationErr)
#[tokio::test]
async fn rejects_zero_duration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_run_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TimeService::new(db).submit(run(1, "vorkath", 0, &[1])).await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));

    Ok(())
}
