//! Wise Old Man competition settlement.
//!
//! A settlement fetches a competition, keeps the participants whose gain meets the
//! cutoff, resolves them to guild users through their registered aliases and credits
//! each resolved user the guild's `event_participation` source once.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{point_source::PointSourceRepository, rsn::RsnRepository},
    error::{competition::CompetitionError, points::PointsError, AppError},
    model::{
        competition::{
            filter_by_cutoff, resolve_participants, Competition, CompetitionSettlement,
            SettleCompetitionParams,
        },
        points::EVENT_PARTICIPATION,
    },
    service::points::credit,
    wom::WomClient,
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
    wom: &'a WomClient,
}

impl<'a> CompetitionService<'a> {
    pub fn new(db: &'a DatabaseConnection, wom: &'a WomClient) -> Self {
        Self { db, wom }
    }

    /// Fetches a competition and settles it.
    ///
    /// The fetch happens before any store access, so an unreachable Wise Old Man leaves
    /// the guild untouched.
    ///
    /// # Returns
    /// - `Ok(CompetitionSettlement)` - Credited users and their new balances
    /// - `Err(CompetitionError::Request | Status | Decode)` - Fetch failed
    /// - `Err(CompetitionError::NoParticipants | NoneQualified | NoneResolved)` - Nobody
    ///   to credit; nothing changed
    /// - `Err(PointsError::SourceNotFound)` - Guild has no `event_participation` source
    pub async fn settle(
        &self,
        params: SettleCompetitionParams,
    ) -> Result<CompetitionSettlement, AppError> {
        params.validate()?;

        let competition = self.wom.get_competition(params.competition_id).await?;

        self.settle_fetched(&params, &competition).await
    }

    /// Settles an already fetched competition.
    pub async fn settle_fetched(
        &self,
        params: &SettleCompetitionParams,
        competition: &Competition,
    ) -> Result<CompetitionSettlement, AppError> {
        if competition.participations.is_empty() {
            return Err(CompetitionError::NoParticipants(params.competition_id).into());
        }

        let qualified = filter_by_cutoff(&competition.participations, params.cutoff);
        if qualified.is_empty() {
            return Err(CompetitionError::NoneQualified {
                competition_id: params.competition_id,
                cutoff: params.cutoff,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let aliases = RsnRepository::new(&txn).get_by_guild(params.guild_id).await?;
        let user_ids = resolve_participants(&qualified, &aliases);
        if user_ids.is_empty() {
            return Err(CompetitionError::NoneResolved(params.competition_id).into());
        }

        let source = PointSourceRepository::new(&txn)
            .find(params.guild_id, EVENT_PARTICIPATION)
            .await?
            .ok_or_else(|| PointsError::SourceNotFound {
                guild_id: params.guild_id,
                name: EVENT_PARTICIPATION.to_string(),
            })?;

        for participation in &qualified {
            tracing::debug!(
                competition_id = params.competition_id,
                player = %participation.player.display_name,
                gained = participation.progress.gained,
                "Qualified participant"
            );
        }

        let update = credit(&txn, params.guild_id, &user_ids, source.points).await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            competition_id = params.competition_id,
            qualified = qualified.len(),
            credited = update.users.len(),
            given = update.given,
            "Settled competition"
        );

        Ok(CompetitionSettlement {
            competition_id: params.competition_id,
            title: competition.title.clone(),
            cutoff: params.cutoff,
            given: update.given,
            users: update.users,
        })
    }
}
