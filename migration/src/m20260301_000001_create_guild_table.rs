use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(big_integer(Guild::GuildId).primary_key())
                    .col(double(Guild::Multiplier).default(1.0))
                    .col(big_integer_null(Guild::PbChannelId))
                    .col(
                        timestamp_with_time_zone(Guild::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    GuildId,
    Multiplier,
    PbChannelId,
    CreatedAt,
}
