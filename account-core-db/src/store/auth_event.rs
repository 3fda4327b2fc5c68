use std::net::IpAddr;

use account_core_api::{ApiError, ApiResult, AuthEvent};
use tracing::info;
use uuid::Uuid;

use super::account_store::{log_rejection, repository_error, PendingAudit};
use crate::repository::{AccountRepository, UnitOfWork, UnitOfWorkSession, Update};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Audits a login, logout or password change.
    ///
    /// A login also stamps `last_login_at` and resets `failed_login_attempts`.
    /// Other events leave the account untouched. Deleted accounts are not found.
    pub async fn record_auth_event(
        &self,
        id: Uuid,
        event: AuthEvent,
        ip_address: Option<IpAddr>,
    ) -> ApiResult<()> {
        let session = self.begin().await?;
        let result = self
            .record_auth_event_in_session(&session, id, event, ip_address)
            .await;
        let result = Self::finish(session, result).await;
        match &result {
            Ok(()) => info!(account_id = %id, ?event, ?ip_address, "auth event recorded"),
            Err(err) => log_rejection("record_auth_event", Some(id), err),
        }
        result
    }

    async fn record_auth_event_in_session(
        &self,
        session: &U::Session,
        id: Uuid,
        event: AuthEvent,
        ip_address: Option<IpAddr>,
    ) -> ApiResult<()> {
        let current = session
            .accounts()
            .load_for_update(id)
            .await
            .map_err(repository_error)?
            .filter(|account| !account.status.is_deleted())
            .ok_or(ApiError::NotFound(id))?;

        let at = self.next_timestamp(current.updated_at);
        if event == AuthEvent::Login {
            let mut logged_in = current;
            logged_in.last_login_at = Some(at);
            logged_in.failed_login_attempts = 0;
            logged_in.updated_at = at;
            session
                .accounts()
                .update(&logged_in)
                .await
                .map_err(repository_error)?;
        }

        self.append_audit(
            session,
            id,
            PendingAudit {
                action: event.into(),
                old_value: None,
                new_value: None,
                ip_address,
                at,
            },
        )
        .await?;

        Ok(())
    }
}
