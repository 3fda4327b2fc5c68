use std::sync::Arc;

use account_core_db::AccountStore;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db_init::init_database;
use crate::unit_of_work::PostgresUnitOfWork;

/// Connects, applies pending migrations and returns a store backed by the pool.
pub async fn connect_store(
    config: &DatabaseConfig,
) -> Result<AccountStore<PostgresUnitOfWork>, Box<dyn std::error::Error + Send + Sync>> {
    let pool = config.connect().await?;
    init_database(&pool).await?;
    info!(max_connections = config.max_connections, "account store connected");
    Ok(AccountStore::new(PostgresUnitOfWork::new(Arc::new(pool))))
}
