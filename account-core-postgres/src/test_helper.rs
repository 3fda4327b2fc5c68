//! Test helper module for transaction-based test isolation
//!
//! [`setup_test_context`] hands out repositories bound to one transaction that
//! is rolled back when the context is dropped. Tests that exercise commits go
//! through [`setup_unit_of_work`] or [`setup_store`] instead and rely on random
//! emails and usernames to stay independent.

use std::sync::Arc;

use account_core_db::repository::UnitOfWorkSession;
use account_core_db::AccountStore;
use rand::distributions::Alphanumeric;
use postgres_unit_of_work::Executor;
use rand::Rng;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::db_init::init_database;
use crate::repository::account::account_repository::AccountRepositoryImpl;
use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
use crate::unit_of_work::{PostgresSession, PostgresUnitOfWork};

/// Test context that provides a transactional database session
pub struct TestContext {
    session: PostgresSession,
}

impl TestContext {
    pub fn accounts(&self) -> &AccountRepositoryImpl {
        self.session.accounts()
    }

    pub fn audit_entries(&self) -> &AuditEntryRepositoryImpl {
        self.session.audit_entries()
    }
}

async fn connect(max_connections: u32) -> Result<Arc<PgPool>, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig {
        max_connections,
        ..DatabaseConfig::from_env()?
    };
    let pool = config.connect().await?;
    init_database(&pool).await?;
    Ok(Arc::new(pool))
}

/// Setup a test context whose transaction is rolled back on drop
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     ctx.accounts().create(&create_test_account()).await?;
///     // All changes will be rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let pool = connect(1).await?;
    let tx = pool.begin().await?;
    Ok(TestContext {
        session: PostgresSession::new(Executor::new(tx)),
    })
}

pub async fn setup_unit_of_work() -> Result<PostgresUnitOfWork, Box<dyn std::error::Error + Send + Sync>> {
    Ok(PostgresUnitOfWork::new(connect(5).await?))
}

pub async fn setup_store() -> Result<AccountStore<PostgresUnitOfWork>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(AccountStore::new(setup_unit_of_work().await?))
}

/// Random alphanumeric string of `len` characters
pub fn random(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::account::account_repository::test_utils::create_test_account;
    use account_core_db::repository::{Create, Load};

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let account = create_test_account();
        {
            let ctx = setup_test_context().await?;
            ctx.accounts().create(&account).await?;
            assert!(ctx.accounts().load(account.id).await?.is_some());
        }

        let ctx = setup_test_context().await?;
        assert!(ctx.accounts().load(account.id).await?.is_none());

        Ok(())
    }

    #[test]
    fn test_random_length_and_charset() {
        let value = random(16);
        assert_eq!(value.len(), 16);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
