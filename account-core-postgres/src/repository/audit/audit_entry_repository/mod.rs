pub mod repo_impl;
pub mod create;
pub mod load_audits;

pub use repo_impl::AuditEntryRepositoryImpl;
