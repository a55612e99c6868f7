use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User, m20260303_000008_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(integer(Participation::EventId))
                    .col(big_integer(Participation::UserId))
                    .col(big_integer(Participation::GuildId))
                    .col(integer(Participation::Placement))
                    .primary_key(
                        Index::create()
                            .col(Participation::EventId)
                            .col(Participation::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_event_id")
                            .from(Participation::Table, Participation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participation_user")
                            .from(
                                Participation::Table,
                                (Participation::GuildId, Participation::UserId),
                            )
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
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participation {
    Table,
    EventId,
    UserId,
    GuildId,
    Placement,
}
