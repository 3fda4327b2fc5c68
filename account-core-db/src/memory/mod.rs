//! In-memory storage backend.
//!
//! Every session takes a store-wide lock and works on a private copy of the
//! committed state, which replaces the committed state on commit. Sessions are
//! therefore fully serialized. Useful for tests and for embedding the store
//! without a database.

mod account_repository;
mod audit_entry_repository;
mod unit_of_work;

pub use account_repository::MemoryAccountRepository;
pub use audit_entry_repository::MemoryAuditEntryRepository;
pub use unit_of_work::{MemorySession, MemoryUnitOfWork};

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{AccountModel, AuditEntryModel};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    pub(crate) accounts: HashMap<Uuid, AccountModel>,
    /// Insertion order is audit order
    pub(crate) audit_entries: Vec<AuditEntryModel>,
}
