use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test environment around a private in-memory SQLite database.
pub struct TestContext {
    /// Set once `database()` has connected; `TestBuilder::build` always connects.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Connects on first use and returns the shared connection afterwards.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                // Enforce the foreign keys declared on the entities
                db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
                db
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
