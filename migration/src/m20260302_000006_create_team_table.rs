use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User, m20260302_000005_create_run_table::Run,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(integer(Team::RunId))
                    .col(big_integer(Team::UserId))
                    .col(big_integer(Team::GuildId))
                    .primary_key(Index::create().col(Team::RunId).col(Team::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_run_id")
                            .from(Team::Table, Team::RunId)
                            .to(Run::Table, Run::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_user")
                            .from(Team::Table, (Team::GuildId, Team::UserId))
                            .to(User::Table, (User::GuildId, User::UserId))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    RunId,
    UserId,
    GuildId,
}
