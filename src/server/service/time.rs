//! Run times and personal-best reconciliation.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        guild_boss::GuildBossRepository, run::RunRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::time::{is_new_personal_best, GuildBoss, Run, RunFilter, RunSubmission, SubmitRunParams},
    service::{format_ids, missing_parent},
    util::validate::{check_boss_name, normalize_boss_name},
};

/// Upper bound applied to run listings.
const MAX_RUN_LIMIT: u64 = 500;

pub struct TimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a run and moves the guild's personal best if it is strictly faster.
    ///
    /// Runs in one transaction: the run is inserted first, then its team, then the
    /// guild's pointer for the boss is compared and possibly moved. Ties keep the
    /// existing best. Superseded runs are kept.
    ///
    /// When the guild does not track the boss, the run and team are still committed
    /// and the call reports not-found.
    ///
    /// # Returns
    /// - `Ok(RunSubmission)` - Stored run and whether it became the personal best
    /// - `Err(AppError::ValidationErr)` - Bad boss name, duration or team
    /// - `Err(AppError::NotFound)` - Guild or a team member not found (nothing stored),
    ///   or the boss is not tracked (run stored)
    pub async fn submit(&self, params: SubmitRunParams) -> Result<RunSubmission, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let run = RunRepository::new(&txn)
            .create(params.guild_id, &params.boss_name, params.duration_ms)
            .await
            .map_err(|e| missing_parent(e, || format!("guild {} not found", params.guild_id)))?;

        // Checked before the insert: a failed statement aborts a Postgres transaction.
        let registered = UserRepository::new(&txn)
            .get_by_ids(params.guild_id, &params.user_ids)
            .await?;
        if registered.len() != params.user_ids.len() {
            let missing: Vec<u64> = params
                .user_ids
                .iter()
                .copied()
                .filter(|id| !registered.iter().any(|u| u.user_id as u64 == *id))
                .collect();
            return Err(AppError::NotFound(format!(
                "users not found in guild: {}",
                format_ids(&missing)
            )));
        }

        TeamRepository::new(&txn)
            .create_many(params.guild_id, run.id, &params.user_ids)
            .await
            .map_err(|e| missing_parent(e, || "team member not found in guild".to_string()))?;

        let boss_repo = GuildBossRepository::new(&txn);
        let Some(boss) = boss_repo.find(params.guild_id, &params.boss_name).await? else {
            return Err(keep_untracked(txn, &params, run.id).await);
        };

        let previous_best = match boss.pb_run_id {
            Some(id) => RunRepository::new(&txn).find_by_id(id).await?,
            None => None,
        };

        let personal_best = is_new_personal_best(
            previous_best.as_ref().map(|r| r.duration_ms),
            run.duration_ms,
        );

        if personal_best {
            let affected = boss_repo
                .set_personal_best(params.guild_id, &params.boss_name, run.id)
                .await?;
            // Untracked since the lookup above.
            if affected != 1 {
                return Err(keep_untracked(txn, &params, run.id).await);
            }
        }

        let mut runs = vec![run];
        runs.extend(previous_best);
        let mut runs = with_teams(&txn, runs).await?.into_iter();

        txn.commit().await?;

        let (Some(run), previous_best) = (runs.next(), runs.next()) else {
            return Err(AppError::InternalError(
                "submitted run missing after insert".to_string(),
            ));
        };

        if personal_best {
            tracing::info!(
                guild_id = params.guild_id,
                boss = %params.boss_name,
                run_id = run.id,
                duration_ms = run.duration_ms,
                "New personal best"
            );
        }

        Ok(RunSubmission {
            run,
            personal_best,
            previous_best,
        })
    }

    /// Lists a guild's runs, newest first.
    pub async fn list(&self, guild_id: u64, mut filter: RunFilter) -> Result<Vec<Run>, AppError> {
        filter.limit = Some(filter.limit.unwrap_or(MAX_RUN_LIMIT).min(MAX_RUN_LIMIT));

        let runs = RunRepository::new(self.db).filter(guild_id, &filter).await?;

        with_teams(self.db, runs).await
    }

    /// Lists tracked bosses with the guild's best run on each.
    pub async fn bosses(&self, guild_id: u64) -> Result<Vec<GuildBoss>, AppError> {
        let bosses = GuildBossRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?;

        let run_ids: Vec<i32> = bosses.iter().filter_map(|b| b.pb_run_id).collect();
        let runs = RunRepository::new(self.db).get_by_ids(&run_ids).await?;
        let mut runs: HashMap<i32, Run> = with_teams(self.db, runs)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        Ok(bosses
            .into_iter()
            .map(|b| GuildBoss {
                personal_best: b.pb_run_id.and_then(|id| runs.remove(&id)),
                boss_name: b.boss_name,
            })
            .collect())
    }

    /// Starts tracking a boss. Idempotent.
    pub async fn track(&self, guild_id: u64, boss_name: &str) -> Result<GuildBoss, AppError> {
        let boss_name = normalize_boss_name(boss_name);

        let mut errors = ValidationErrors::new();
        check_boss_name(&mut errors, &boss_name);
        errors.into_result()?;

        let boss = GuildBossRepository::new(self.db)
            .track(guild_id, &boss_name)
            .await
            .map_err(|e| missing_parent(e, || format!("guild {} not found", guild_id)))?;

        let personal_best = match boss.pb_run_id {
            Some(id) => {
                let runs = RunRepository::new(self.db).get_by_ids(&[id]).await?;
                with_teams(self.db, runs).await?.into_iter().next()
            }
            None => None,
        };

        Ok(GuildBoss {
            boss_name: boss.boss_name,
            personal_best,
        })
    }

    pub async fn untrack(&self, guild_id: u64, boss_name: &str) -> Result<(), AppError> {
        let boss_name = normalize_boss_name(boss_name);

        let deleted = GuildBossRepository::new(self.db)
            .untrack(guild_id, &boss_name)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "guild does not track boss '{}'",
                boss_name
            )));
        }

        Ok(())
    }
}

/// Commits a run stored for a boss the guild does not track.
///
/// Returns the not-found error to report, or the store error if the commit failed.
pub(super) async fn keep_untracked(
    txn: DatabaseTransaction,
    params: &SubmitRunParams,
    run_id: i32,
) -> AppError {
    if let Err(e) = txn.commit().await {
        return e.into();
    }

    tracing::info!(
        guild_id = params.guild_id,
        boss = %params.boss_name,
        run_id,
        "Stored run for untracked boss"
    );

    AppError::NotFound(format!(
        "guild does not track boss '{}'",
        params.boss_name
    ))
}

/// Loads the teams of `runs` in one query, preserving run order.
async fn with_teams<C: ConnectionTrait>(
    db: &C,
    runs: Vec<entity::run::Model>,
) -> Result<Vec<Run>, AppError> {
    let ids: Vec<i32> = runs.iter().map(|r| r.id).collect();

    let mut teams: HashMap<i32, Vec<entity::team::Model>> = HashMap::new();
    for member in TeamRepository::new(db).get_by_run_ids(&ids).await? {
        teams.entry(member.run_id).or_default().push(member);
    }

    Ok(runs
        .into_iter()
        .map(|run| {
            let team = teams.remove(&run.id).unwrap_or_default();
            Run::from_entity(run, team)
        })
        .collect())
}
