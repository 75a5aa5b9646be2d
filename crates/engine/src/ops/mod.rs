use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, IsolationLevel,
    TransactionTrait,
};

use crate::ResultEngine;

mod access;
mod attachments;
mod audit;
mod budgets;
mod categories;
mod employers;
mod expenses;
mod funds;
mod household_members;
mod households;
mod incomes;
mod loans;
mod vendors;

/// Run a block inside a REPEATABLE READ transaction, committing on success
/// and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.begin_repeatable_read().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    async fn begin_repeatable_read(&self) -> ResultEngine<DatabaseTransaction> {
        // SQLite has no isolation-level selection; its single-writer lock is
        // at least as strict as REPEATABLE READ.
        let db_tx = match self.database.get_database_backend() {
            DbBackend::Sqlite => self.database.begin().await?,
            _ => {
                self.database
                    .begin_with_config(Some(IsolationLevel::RepeatableRead), None)
                    .await?
            }
        };
        Ok(db_tx)
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
