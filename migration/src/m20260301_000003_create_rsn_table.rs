use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rsn::Table)
                    .if_not_exists()
                    .col(big_integer(Rsn::GuildId))
                    .col(string_len(Rsn::Rsn, 12))
                    .col(big_integer(Rsn::UserId))
                    .col(big_integer_null(Rsn::WomId))
                    .primary_key(Index::create().col(Rsn::GuildId).col(Rsn::Rsn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rsn_user")
                            .from(Rsn::Table, (Rsn::GuildId, Rsn::UserId))
                            .to(User::Table, (User::GuildId, User::UserId))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rsn_guild_wom_id")
                    .table(Rsn::Table)
                    .col(Rsn::GuildId)
                    .col(Rsn::WomId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rsn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rsn {
    Table,
    GuildId,
    Rsn,
    UserId,
    WomId,
}
