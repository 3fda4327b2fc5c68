pub mod config;
pub mod db_init;
pub mod postgres_store;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use config::{ConfigError, DatabaseConfig};
pub use postgres_store::connect_store;
pub use repository::account::account_repository::AccountRepositoryImpl;
pub use repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
pub use unit_of_work::{PostgresSession, PostgresUnitOfWork};

#[cfg(test)]
pub mod test_helper;
