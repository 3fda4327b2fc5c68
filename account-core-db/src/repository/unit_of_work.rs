use async_trait::async_trait;

use crate::repository::{AccountRepository, AuditEntryRepository};

/// Starts sessions. Implemented once per storage backend.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Session: UnitOfWorkSession;

    /// Begin a new transaction
    async fn begin(&self) -> Result<Self::Session, Box<dyn std::error::Error + Send + Sync>>;
}

/// One transaction and the repositories bound to it.
///
/// Writes made through the repositories become visible to other sessions only on
/// [`commit`](UnitOfWorkSession::commit). Dropping a session without committing
/// rolls it back.
#[async_trait]
pub trait UnitOfWorkSession: Send + Sync + Sized {
    type Accounts: AccountRepository;
    type AuditEntries: AuditEntryRepository;

    fn accounts(&self) -> &Self::Accounts;

    fn audit_entries(&self) -> &Self::AuditEntries;

    async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
