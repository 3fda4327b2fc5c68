use account_core_api::{AccountStatus, ApiError, ApiResult, AuditAction};
use tracing::info;
use uuid::Uuid;

use super::account_store::{log_rejection, repository_error, PendingAudit};
use crate::repository::{AccountRepository, UnitOfWork, UnitOfWorkSession, Update};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Soft delete: moves the account to `deleted` and writes a `delete` audit
    /// entry holding the pre-image only.
    ///
    /// An account that is already deleted is reported as not found.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let session = self.begin().await?;
        let result = self.delete_in_session(&session, id).await;
        let result = Self::finish(session, result).await;
        match &result {
            Ok(()) => info!(account_id = %id, "account deleted"),
            Err(err) => log_rejection("delete", Some(id), err),
        }
        result
    }

    async fn delete_in_session(&self, session: &U::Session, id: Uuid) -> ApiResult<()> {
        let current = session
            .accounts()
            .load_for_update(id)
            .await
            .map_err(repository_error)?
            .filter(|account| !account.status.is_deleted())
            .ok_or(ApiError::NotFound(id))?;

        let deleted_at = self.next_timestamp(current.updated_at);
        let mut deleted = current.clone();
        deleted.status = AccountStatus::Deleted;
        deleted.updated_at = deleted_at;
        session
            .accounts()
            .update(&deleted)
            .await
            .map_err(repository_error)?;

        self.append_audit(
            session,
            id,
            PendingAudit {
                action: AuditAction::Delete,
                old_value: Some(current.snapshot()?),
                new_value: None,
                ip_address: None,
                at: deleted_at,
            },
        )
        .await?;

        Ok(())
    }
}
