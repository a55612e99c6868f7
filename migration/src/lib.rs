pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_table;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_rsn_table;
mod m20260301_000004_create_point_source_table;
mod m20260302_000005_create_run_table;
mod m20260302_000006_create_team_table;
mod m20260302_000007_create_guild_boss_table;
mod m20260303_000008_create_event_table;
mod m20260303_000009_create_participation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_table::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_rsn_table::Migration),
            Box::new(m20260301_000004_create_point_source_table::Migration),
            Box::new(m20260302_000005_create_run_table::Migration),
            Box::new(m20260302_000006_create_team_table::Migration),
            Box::new(m20260302_000007_create_guild_boss_table::Migration),
            Box::new(m20260303_000008_create_event_table::Migration),
            Box::new(m20260303_000009_create_participation_table::Migration),
        ]
    }
}
