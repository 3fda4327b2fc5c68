use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use super::MemoryState;
use crate::models::AuditEntryModel;
use crate::repository::{Create, LoadAudits, Page, PageRequest};

pub struct MemoryAuditEntryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryAuditEntryRepository {
    pub(crate) fn new(state: Arc<Mutex<MemoryState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl Create<AuditEntryModel> for MemoryAuditEntryRepository {
    async fn create(
        &self,
        item: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock();
        if !state.accounts.contains_key(&item.account_id) {
            return Err(format!("Audit entry references unknown account {}", item.account_id).into());
        }
        state.audit_entries.push(item.clone());
        Ok(item.clone())
    }
}

#[async_trait]
impl LoadAudits<AuditEntryModel> for MemoryAuditEntryRepository {
    async fn load_audits(
        &self,
        subject_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let entries: Vec<AuditEntryModel> = self
            .state
            .lock()
            .audit_entries
            .iter()
            .filter(|e| e.account_id == subject_id)
            .cloned()
            .collect();
        Ok(page.slice(entries))
    }
}
