use account_core_api::validation::{check_constraints, check_credential_present};
use account_core_api::{AccountPatch, AccountStatus, ApiError, ApiResult, AuditAction};
use tracing::{debug, info};
use uuid::Uuid;

use super::account_store::{log_rejection, repository_error, PendingAudit};
use crate::models::AccountModel;
use crate::repository::{AccountRepository, UnitOfWork, UnitOfWorkSession, Update};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Applies a partial update and writes an `update` audit entry holding the
    /// pre- and post-image.
    ///
    /// A patch that moves the account to `deleted` is a soft delete: it is
    /// audited as `delete` with the pre-image only, and on an account that is
    /// already deleted it fails with `NotFound`.
    pub async fn update(&self, id: Uuid, patch: AccountPatch) -> ApiResult<AccountModel> {
        if patch.is_empty() {
            debug!(account_id = %id, "empty patch still refreshes updated_at");
        }
        let session = self.begin().await?;
        let result = self.update_in_session(&session, id, patch).await;
        let result = Self::finish(session, result).await;
        match &result {
            Ok(account) => info!(account_id = %account.id, status = %account.status, "account updated"),
            Err(err) => log_rejection("update", Some(id), err),
        }
        result
    }

    /// Update restricted to the status field.
    pub async fn change_status(&self, id: Uuid, status: AccountStatus) -> ApiResult<AccountModel> {
        self.update(id, AccountPatch::status(status)).await
    }

    async fn update_in_session(
        &self,
        session: &U::Session,
        id: Uuid,
        patch: AccountPatch,
    ) -> ApiResult<AccountModel> {
        let current = session
            .accounts()
            .load_for_update(id)
            .await
            .map_err(repository_error)?
            .ok_or(ApiError::NotFound(id))?;

        // moving to `deleted` is a soft delete and follows delete's rules
        let deleting = patch.status.is_some_and(|status| status.is_deleted());
        if deleting && current.status.is_deleted() {
            return Err(ApiError::NotFound(id));
        }

        let mut draft = current.to_draft();
        let changed_unique = patch.apply_to(&mut draft);

        check_constraints(&draft, self.clock.today())?;
        self.check_unique(session, &draft, &changed_unique, Some(id))
            .await?;
        check_credential_present(&draft.credential_hash)?;

        let updated_at = self.next_timestamp(current.updated_at);
        let updated = current.with_draft(draft, updated_at)?;
        let saved = session
            .accounts()
            .update(&updated)
            .await
            .map_err(repository_error)?;

        self.append_audit(
            session,
            id,
            PendingAudit {
                action: if deleting { AuditAction::Delete } else { AuditAction::Update },
                old_value: Some(current.snapshot()?),
                new_value: if deleting { None } else { Some(saved.snapshot()?) },
                ip_address: None,
                at: updated_at,
            },
        )
        .await?;

        Ok(saved)
    }
}
