use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment.
///
/// Owns a connection to its own in-memory SQLite database. A session is only
/// created when a test asks for one, since most repository tests don't need it.
pub struct TestContext {
    pub db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Opens a new, empty in-memory database.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db, session: None })
    }

    /// Executes the given CREATE TABLE statements in order.
    pub async fn create_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session store on first use.
    ///
    /// The store lives in the same in-memory database as the roster tables.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::SessionStore(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(1))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::SessionStore("session was not initialized".to_string()))
    }

    /// Returns the database together with the session.
    ///
    /// Avoids holding a mutable borrow of the context while using both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        let session = self
            .session
            .as_ref()
            .ok_or_else(|| TestError::SessionStore("session was not initialized".to_string()))?;

        Ok((&self.db, session))
    }
}
