use account_core_api::ApiResult;
use uuid::Uuid;

use super::account_store::repository_error;
use crate::models::AuditEntryModel;
use crate::repository::{LoadAudits, Page, PageRequest, UnitOfWork, UnitOfWorkSession};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Audit trail of one account, oldest entry first.
    pub async fn load_audits(
        &self,
        account_id: Uuid,
        page: PageRequest,
    ) -> ApiResult<Page<AuditEntryModel>> {
        let session = self.begin().await?;
        let result = session
            .audit_entries()
            .load_audits(account_id, page)
            .await
            .map_err(repository_error);
        Self::finish(session, result).await
    }
}
