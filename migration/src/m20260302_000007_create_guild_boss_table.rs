use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_guild_table::Guild, m20260302_000005_create_run_table::Run,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildBoss::Table)
                    .if_not_exists()
                    .col(big_integer(GuildBoss::GuildId))
                    .col(string_len(GuildBoss::BossName, 64))
                    .col(integer_null(GuildBoss::PbRunId))
                    .primary_key(
                        Index::create()
                            .col(GuildBoss::GuildId)
                            .col(GuildBoss::BossName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_boss_guild_id")
                            .from(GuildBoss::Table, GuildBoss::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_boss_pb_run_id")
                            .from(GuildBoss::Table, GuildBoss::PbRunId)
                            .to(Run::Table, Run::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildBoss::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildBoss {
    Table,
    GuildId,
    BossName,
    PbRunId,
}
