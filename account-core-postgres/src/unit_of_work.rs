use std::sync::Arc;

use account_core_db::repository::{UnitOfWork, UnitOfWorkSession};
use async_trait::async_trait;
use postgres_unit_of_work::Executor;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use crate::repository::account::account_repository::AccountRepositoryImpl;
use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;

/// Starts one PostgreSQL transaction per session
#[derive(Clone)]
pub struct PostgresUnitOfWork {
    pool: Arc<PgPool>,
}

impl PostgresUnitOfWork {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    type Session = PostgresSession;

    async fn begin(&self) -> Result<PostgresSession, Box<dyn std::error::Error + Send + Sync>> {
        let tx = self.pool.begin().await?;
        Ok(PostgresSession::new(Executor::new(tx)))
    }
}

/// Repositories sharing a single transaction
///
/// Dropping the session without committing rolls the transaction back.
pub struct PostgresSession {
    executor: Executor,
    accounts: AccountRepositoryImpl,
    audit_entries: AuditEntryRepositoryImpl,
}

impl PostgresSession {
    pub fn new(executor: Executor) -> Self {
        Self {
            accounts: AccountRepositoryImpl::new(executor.clone()),
            audit_entries: AuditEntryRepositoryImpl::new(executor.clone()),
            executor,
        }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Takes the transaction out of the shared executor; repositories still
    /// holding a clone fail with "Transaction has been consumed" afterwards.
    async fn take_transaction(
        &self,
    ) -> Result<Transaction<'static, Postgres>, Box<dyn std::error::Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        tx.take().ok_or_else(|| "Transaction has been consumed".into())
    }
}

#[async_trait]
impl UnitOfWorkSession for PostgresSession {
    type Accounts = AccountRepositoryImpl;
    type AuditEntries = AuditEntryRepositoryImpl;

    fn accounts(&self) -> &AccountRepositoryImpl {
        &self.accounts
    }

    fn audit_entries(&self) -> &AuditEntryRepositoryImpl {
        &self.audit_entries
    }

    async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.take_transaction().await?.commit().await?;
        debug!("transaction committed");
        Ok(())
    }

    async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.take_transaction().await?.rollback().await?;
        debug!("transaction rolled back");
        Ok(())
    }
}
