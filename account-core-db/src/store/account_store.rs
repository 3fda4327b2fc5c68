use std::net::IpAddr;
use std::sync::Arc;

use account_core_api::{
    AccountDraft, ApiError, ApiResult, AuditAction, Clock, IdGenerator, SystemClock, UniqueField,
    UuidV4Generator,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::models::AuditEntryModel;
use crate::repository::{AccountRepository, Create, UniqueViolation, UnitOfWork, UnitOfWorkSession};

/// Authoritative owner of accounts and their audit trail.
///
/// Every public operation opens one session on the unit of work, performs the
/// account write and its audit insert through that session, and commits. Any
/// error rolls the session back so neither record set changes.
pub struct AccountStore<U: UnitOfWork> {
    pub(crate) unit_of_work: U,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
}

/// Audit entry about to be written; id and account come from the store.
pub(crate) struct PendingAudit {
    pub action: AuditAction,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub ip_address: Option<IpAddr>,
    pub at: DateTime<Utc>,
}

impl<U: UnitOfWork> AccountStore<U> {
    pub fn new(unit_of_work: U) -> Self {
        Self::with_collaborators(
            unit_of_work,
            Arc::new(SystemClock),
            Arc::new(UuidV4Generator),
        )
    }

    pub fn with_collaborators(
        unit_of_work: U,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            unit_of_work,
            clock,
            id_generator,
        }
    }

    pub fn unit_of_work(&self) -> &U {
        &self.unit_of_work
    }

    pub(crate) async fn begin(&self) -> ApiResult<U::Session> {
        self.unit_of_work.begin().await.map_err(repository_error)
    }

    /// Commits on success, rolls back on failure.
    pub(crate) async fn finish<T>(session: U::Session, result: ApiResult<T>) -> ApiResult<T> {
        match result {
            Ok(value) => {
                session.commit().await.map_err(repository_error)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = session.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Timestamp for a mutation; never earlier than the previous `updated_at`.
    pub(crate) fn next_timestamp(&self, previous: DateTime<Utc>) -> DateTime<Utc> {
        self.clock.now().max(previous)
    }

    /// Storage-level uniqueness for the given fields of `draft`, ignoring the
    /// account being updated.
    pub(crate) async fn check_unique(
        &self,
        session: &U::Session,
        draft: &AccountDraft,
        fields: &[UniqueField],
        updating: Option<Uuid>,
    ) -> ApiResult<()> {
        for field in fields {
            let existing = match field {
                UniqueField::Email => session.accounts().find_by_email(&draft.email).await,
                UniqueField::Username => {
                    session.accounts().find_by_username(&draft.username).await
                }
            }
            .map_err(repository_error)?;

            if existing.is_some_and(|other| Some(other.id) != updating) {
                return Err(ApiError::Conflict(*field));
            }
        }
        Ok(())
    }

    pub(crate) async fn append_audit(
        &self,
        session: &U::Session,
        account_id: Uuid,
        pending: PendingAudit,
    ) -> ApiResult<AuditEntryModel> {
        let entry = AuditEntryModel {
            id: self.id_generator.next_id(),
            account_id,
            action: pending.action,
            old_value: pending.old_value,
            new_value: pending.new_value,
            ip_address: pending.ip_address,
            created_at: pending.at,
        };
        session
            .audit_entries()
            .create(&entry)
            .await
            .map_err(repository_error)
    }
}

/// Maps repository failures onto the API error model.
pub(crate) fn repository_error(err: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    match err.downcast_ref::<UniqueViolation>() {
        Some(violation) => ApiError::Conflict(violation.field),
        None => ApiError::DatabaseError(err.to_string()),
    }
}

/// Logs a rejected write at a level matching its kind.
pub(crate) fn log_rejection(operation: &'static str, account_id: Option<Uuid>, err: &ApiError) {
    match err {
        ApiError::ValidationError { code } => {
            warn!(operation, ?account_id, code = %code, "account write rejected")
        }
        ApiError::Conflict(field) => {
            warn!(operation, ?account_id, field = %field, "account write conflicts")
        }
        ApiError::NotFound(id) => {
            warn!(operation, account_id = %id, "account not found")
        }
        ApiError::InternalError(_) | ApiError::DatabaseError(_) => {
            tracing::error!(operation, ?account_id, error = %err, "account write failed")
        }
    }
}
