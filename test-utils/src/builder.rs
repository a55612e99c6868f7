use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Guild, User};
///
/// let test = TestBuilder::new()
///     .with_table(Guild)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including foreign keys derived from `belongs_to` relations. Tables
    /// with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the guild, user, alias and point source tables.
    ///
    /// Covers everything needed for points settlement and competition settlement.
    pub fn with_guild_tables(self) -> Self {
        self.with_table(Guild)
            .with_table(User)
            .with_table(Rsn)
            .with_table(PointSource)
    }

    /// Adds the run tracking tables on top of `with_guild_tables()`.
    pub fn with_run_tables(self) -> Self {
        self.with_guild_tables()
            .with_table(Run)
            .with_table(Team)
            .with_table(GuildBoss)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_run_tables()
            .with_table(Event)
            .with_table(Participation)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
