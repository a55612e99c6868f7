use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Run::Table)
                    .if_not_exists()
                    .col(pk_auto(Run::Id))
                    .col(big_integer(Run::GuildId))
                    .col(string_len(Run::BossName, 64))
                    .col(big_integer(Run::DurationMs))
                    .col(
                        timestamp_with_time_zone(Run::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_run_guild_id")
                            .from(Run::Table, Run::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_run_guild_boss")
                    .table(Run::Table)
                    .col(Run::GuildId)
                    .col(Run::BossName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Run::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Run {
    Table,
    Id,
    GuildId,
    BossName,
    DurationMs,
    RecordedAt,
}
