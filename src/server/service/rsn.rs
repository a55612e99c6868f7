use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{rsn::RsnRepository, user::UserRepository},
    error::AppError,
    model::rsn::{AddRsnParams, Rsn},
    service::{already_exists, missing_parent},
};

pub struct RsnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links an RSN to a registered user.
    ///
    /// RSNs are matched ignoring case when competitions are settled, so an alias that
    /// differs from a linked one only in capitalization is rejected.
    ///
    /// # Returns
    /// - `Ok(Rsn)` - Linked alias
    /// - `Err(AppError::ValidationErr)` - Malformed RSN
    /// - `Err(AppError::NotFound)` - User not registered in the guild
    /// - `Err(AppError::Conflict)` - RSN (in any capitalization) or WOM id already linked
    ///   in the guild
    pub async fn add(&self, params: AddRsnParams) -> Result<Rsn, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        let repo = RsnRepository::new(&txn);

        if let Some(linked) = repo.find_ignoring_case(params.guild_id, &params.rsn).await? {
            return Err(AppError::Conflict(format!(
                "RSN '{}' is already linked as '{}'",
                params.rsn, linked.rsn
            )));
        }

        let rsn = repo.create(&params).await.map_err(|e| {
            if e.classification.is_foreign_key_violation() {
                missing_parent(e, || {
                    format!(
                        "user {} not found in guild {}",
                        params.user_id, params.guild_id
                    )
                })
            } else {
                already_exists(e, || format!("RSN '{}' is already linked", params.rsn))
            }
        })?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            user_id = params.user_id,
            rsn = %params.rsn,
            "Linked RSN"
        );

        Ok(Rsn::from_entity(rsn))
    }

    pub async fn list(&self, guild_id: u64, user_id: u64) -> Result<Vec<Rsn>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(guild_id, user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "user {} not found in guild {}",
                user_id, guild_id
            )));
        }

        let rsns = RsnRepository::new(self.db)
            .get_by_user(guild_id, user_id)
            .await?;

        Ok(rsns.into_iter().map(Rsn::from_entity).collect())
    }

    pub async fn remove(&self, guild_id: u64, user_id: u64, rsn: &str) -> Result<(), AppError> {
        let deleted = RsnRepository::new(self.db)
            .delete(guild_id, user_id, rsn)
            .await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "RSN '{}' is not linked to user {}",
                rsn, user_id
            )));
        }

        Ok(())
    }
}
