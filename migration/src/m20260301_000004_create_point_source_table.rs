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
                    .table(PointSource::Table)
                    .if_not_exists()
                    .col(big_integer(PointSource::GuildId))
                    .col(string_len(PointSource::Source, 64))
                    .col(big_integer(PointSource::Points))
                    .primary_key(
                        Index::create()
                            .col(PointSource::GuildId)
                            .col(PointSource::Source),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_source_guild_id")
                            .from(PointSource::Table, PointSource::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointSource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PointSource {
    Table,
    GuildId,
    Source,
    Points,
}
