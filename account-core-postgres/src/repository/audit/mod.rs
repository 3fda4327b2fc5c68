pub mod audit_entry_repository;

pub use audit_entry_repository::AuditEntryRepositoryImpl;
