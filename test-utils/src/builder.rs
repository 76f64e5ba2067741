use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are created from entity definitions in the order they are added, so
/// referenced tables must come before the tables that reference them.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Team)
///     .with_table(Player)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues a CREATE TABLE statement generated from `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every roster table: `user`, `team` and `player`.
    pub fn with_roster_tables(self) -> Self {
        self.with_table(User).with_table(Team).with_table(Player)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::connect().await?;

        test.create_tables(self.tables).await?;

        Ok(test)
    }
}
