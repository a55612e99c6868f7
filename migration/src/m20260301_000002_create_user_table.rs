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
                    .table(User::Table)
                    .if_not_exists()
                    .col(big_integer(User::GuildId))
                    .col(big_integer(User::UserId))
                    .col(
                        big_integer(User::Points)
                            .default(0)
                            .check(Expr::col(User::Points).gte(0)),
                    )
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(User::GuildId).col(User::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_guild_id")
                            .from(User::Table, User::GuildId)
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
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    GuildId,
    UserId,
    Points,
    CreatedAt,
}
