//! Points settlement.
//!
//! Settlement credits a signed amount to a list of users inside one transaction. Every
//! balance change is a single `points = points + delta` statement; balances are never
//! read, modified and written back. If the rows affected by a statement do not cover
//! every user it names, the settlement fails and its transaction rolls back.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionSession, TransactionTrait};

use crate::server::{
    data::{point_source::PointSourceRepository, user::UserRepository},
    error::{points::PointsError, AppError},
    model::points::{
        distinct_in_order, group_by_multiplicity, short_users, AwardPointsParams, CustomPointsParams,
        PointsUpdate, UserBalance,
    },
};

pub struct PointsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Credits the value of a named point source to every listed user.
    ///
    /// A user listed twice is credited twice.
    ///
    /// # Returns
    /// - `Ok(PointsUpdate)` - Source value and each user's new balance
    /// - `Err(AppError::ValidationErr)` - Empty id list or malformed source name
    /// - `Err(PointsError::SourceNotFound)` - Guild has no such source
    /// - `Err(PointsError::UsersNotFound)` - Some users are not registered; nothing changed
    pub async fn award(&self, params: AwardPointsParams) -> Result<PointsUpdate, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let source = PointSourceRepository::new(&txn)
            .find(params.guild_id, &params.source)
            .await?
            .ok_or_else(|| PointsError::SourceNotFound {
                guild_id: params.guild_id,
                name: params.source.clone(),
            })?;

        let update = credit(&txn, params.guild_id, &params.user_ids, source.points).await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            source = %params.source,
            given = update.given,
            users = update.users.len(),
            "Awarded points"
        );

        Ok(update)
    }

    /// Credits (or debits) an arbitrary amount to every listed user.
    ///
    /// The reason is only logged. A debit that would take any user below zero fails the
    /// whole settlement.
    ///
    /// # Returns
    /// - `Ok(PointsUpdate)` - Amount and each user's new balance
    /// - `Err(PointsError::UsersNotFound)` - Some users are not registered; nothing changed
    /// - `Err(PointsError::InsufficientPoints)` - A debit exceeds a balance; nothing changed
    pub async fn award_custom(&self, params: CustomPointsParams) -> Result<PointsUpdate, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let update = credit(&txn, params.guild_id, &params.user_ids, params.delta).await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            delta = params.delta,
            reason = params.reason.as_deref().unwrap_or(""),
            users = update.users.len(),
            "Applied custom points"
        );

        Ok(update)
    }
}

/// Adds `amount` to each listed user, once per occurrence of their id.
///
/// Must run inside a transaction owned by the caller: on error some groups may already
/// have been credited, and only dropping the transaction undoes them. Each group runs
/// under its own savepoint, so a group that falls short is undone before the balances
/// are read back to name the users responsible.
///
/// # Arguments
/// - `db` - Open transaction
/// - `guild_id` - Guild the users belong to
/// - `user_ids` - Users to credit, duplicates allowed
/// - `amount` - Signed amount per occurrence
///
/// # Returns
/// - `Ok(PointsUpdate)` - New balances in first-occurrence order
/// - `Err(PointsError::UsersNotFound)` - Some ids are not registered in the guild
/// - `Err(PointsError::InsufficientPoints)` - A debit exceeds a balance
/// - `Err(AppError::Conflict)` - A statement fell short but no balance explains it
pub(crate) async fn credit<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    guild_id: u64,
    user_ids: &[u64],
    amount: i64,
) -> Result<PointsUpdate, AppError> {
    let repo = UserRepository::new(db);
    let distinct = distinct_in_order(user_ids);
    let groups = group_by_multiplicity(user_ids);

    let mut deltas: Vec<(i64, Vec<u64>)> = Vec::with_capacity(groups.len());
    for (multiplicity, ids) in groups {
        let delta = amount.checked_mul(multiplicity as i64).ok_or_else(|| {
            AppError::BadRequest("points amount is out of range".to_string())
        })?;
        deltas.push((delta, ids));
    }

    // Debits are checked up front so the error can name the users; the update
    // predicate still guards against concurrent changes.
    if amount < 0 {
        check_balances(&repo, guild_id, &distinct, &deltas).await?;
    }

    for (index, (delta, ids)) in deltas.iter().enumerate() {
        let step = db.begin().await?;
        let affected = UserRepository::new(&step)
            .add_points(guild_id, ids, *delta)
            .await?;

        if affected == ids.len() as u64 {
            step.commit().await?;
            continue;
        }

        step.rollback().await?;

        tracing::warn!(
            guild_id,
            delta,
            expected = ids.len(),
            affected,
            "Settlement affected fewer users than requested"
        );

        check_balances(&repo, guild_id, &distinct, &deltas[index..]).await?;

        return Err(AppError::Conflict(
            "Balances changed during settlement, retry the request".to_string(),
        ));
    }

    let mut balances: HashMap<u64, UserBalance> = repo
        .get_by_ids(guild_id, &distinct)
        .await?
        .into_iter()
        .map(UserBalance::from_entity)
        .map(|balance| (balance.user_id, balance))
        .collect();

    let users = distinct
        .into_iter()
        .filter_map(|user_id| balances.remove(&user_id))
        .collect();

    Ok(PointsUpdate {
        given: amount,
        users,
    })
}

/// Fails when a user is missing or cannot absorb their pending delta.
///
/// `pending` must only hold groups whose updates have not been applied in this
/// transaction.
async fn check_balances<C: ConnectionTrait>(
    repo: &UserRepository<'_, C>,
    guild_id: u64,
    distinct: &[u64],
    pending: &[(i64, Vec<u64>)],
) -> Result<(), AppError> {
    let balances: HashMap<u64, i64> = repo
        .get_by_ids(guild_id, distinct)
        .await?
        .into_iter()
        .map(|u| (u.user_id as u64, u.points))
        .collect();

    missing_users(guild_id, distinct, &balances)?;

    let short = short_users(pending, &balances);
    if short.is_empty() {
        Ok(())
    } else {
        Err(PointsError::InsufficientPoints {
            guild_id,
            users: short,
        }
        .into())
    }
}

fn missing_users(
    guild_id: u64,
    requested: &[u64],
    found: &HashMap<u64, i64>,
) -> Result<(), PointsError> {
    let missing: Vec<u64> = requested
        .iter()
        .copied()
        .filter(|id| !found.contains_key(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PointsError::UsersNotFound { guild_id, missing })
    }
}
