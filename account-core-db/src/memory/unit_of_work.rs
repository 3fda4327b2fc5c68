use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{Mutex as TokioMutex, OwnedMutexGuard};
use tracing::debug;

use super::{MemoryAccountRepository, MemoryAuditEntryRepository, MemoryState};
use crate::repository::{UnitOfWork, UnitOfWorkSession};

#[derive(Clone, Default)]
pub struct MemoryUnitOfWork {
    committed: Arc<TokioMutex<MemoryState>>,
}

impl MemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed accounts, deleted ones included
    pub async fn account_count(&self) -> usize {
        self.committed.lock().await.accounts.len()
    }

    /// Number of committed audit entries across all accounts
    pub async fn audit_entry_count(&self) -> usize {
        self.committed.lock().await.audit_entries.len()
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    type Session = MemorySession;

    async fn begin(&self) -> Result<MemorySession, Box<dyn std::error::Error + Send + Sync>> {
        let guard = self.committed.clone().lock_owned().await;
        let working = Arc::new(Mutex::new(guard.clone()));
        Ok(MemorySession {
            guard,
            accounts: MemoryAccountRepository::new(working.clone()),
            audit_entries: MemoryAuditEntryRepository::new(working.clone()),
            working,
        })
    }
}

pub struct MemorySession {
    guard: OwnedMutexGuard<MemoryState>,
    working: Arc<Mutex<MemoryState>>,
    accounts: MemoryAccountRepository,
    audit_entries: MemoryAuditEntryRepository,
}

#[async_trait]
impl UnitOfWorkSession for MemorySession {
    type Accounts = MemoryAccountRepository;
    type AuditEntries = MemoryAuditEntryRepository;

    fn accounts(&self) -> &MemoryAccountRepository {
        &self.accounts
    }

    fn audit_entries(&self) -> &MemoryAuditEntryRepository {
        &self.audit_entries
    }

    async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut committed = self.guard;
        *committed = std::mem::take(&mut *self.working.lock());
        Ok(())
    }

    async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        debug!("discarding in-memory session");
        Ok(())
    }
}
