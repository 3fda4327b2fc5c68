//! Schema setup and teardown
//!
//! `init_database` applies the embedded migrations. `cleanup_database` runs the
//! SQL files under `cleanup/` in descending order to drop the schema again.

use std::fs;
use std::path::Path;

use sqlx::PgPool;
use tracing::info;

/// Apply all pending migrations from `migrations/`
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use account_core_postgres::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!().run(pool).await?;
    info!("account schema migrated");
    Ok(())
}

/// Drop the schema by executing cleanup files in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    let mut entries: Vec<_> = fs::read_dir(&cleanup_dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort_by_key(|entry| std::cmp::Reverse(entry.file_name()));

    for entry in entries {
        let sql = fs::read_to_string(entry.path()).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }
    info!("account schema dropped");

    Ok(())
}
