use account_core_api::{AccountDraft, AccountStatus, ApiError, ApiResult, ValidationCode};
use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for Account
/// Represents a user identity with authentication and status metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    pub id: Uuid,

    /// Stored lower-cased; unique
    pub email: HeaplessString<255>,

    /// Stored as given; unique ignoring case
    pub username: HeaplessString<50>,

    /// Opaque hash produced outside the store, never empty
    pub credential_hash: HeaplessString<255>,

    pub first_name: HeaplessString<100>,
    pub last_name: HeaplessString<100>,
    pub date_of_birth: NaiveDate,
    pub phone_number: Option<HeaplessString<20>>,
    pub status: AccountStatus,
    pub failed_login_attempts: i32,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountModel {
    /// Builds a new account from a validated draft.
    pub fn from_draft(id: Uuid, draft: AccountDraft, now: DateTime<Utc>) -> ApiResult<Self> {
        Ok(AccountModel {
            id,
            email: bounded(&draft.email)?,
            username: bounded(&draft.username)?,
            credential_hash: bounded(&draft.credential_hash)?,
            first_name: bounded(&draft.first_name)?,
            last_name: bounded(&draft.last_name)?,
            date_of_birth: draft.date_of_birth,
            phone_number: draft.phone_number.as_deref().map(bounded).transpose()?,
            status: draft.status,
            failed_login_attempts: draft.failed_login_attempts,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Post-image of an update: writable fields from the draft, identity and
    /// creation time from `self`.
    pub fn with_draft(&self, draft: AccountDraft, updated_at: DateTime<Utc>) -> ApiResult<Self> {
        Ok(AccountModel {
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at,
            ..Self::from_draft(self.id, draft, updated_at)?
        })
    }

    pub fn to_draft(&self) -> AccountDraft {
        AccountDraft {
            email: self.email.to_string(),
            username: self.username.to_string(),
            credential_hash: self.credential_hash.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.as_ref().map(|p| p.to_string()),
            status: self.status,
            failed_login_attempts: self.failed_login_attempts,
        }
    }

    /// Full-record serialization stored in audit entries.
    pub fn snapshot(&self) -> ApiResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ApiError::InternalError(format!("Failed to snapshot account: {e}")))
    }
}

impl Identifiable for AccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Capacities are in bytes, so multi-byte text can be rejected here even after
/// passing the character-count bounds of the draft.
fn bounded<const N: usize>(value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::try_from(value)
        .map_err(|_| ApiError::validation(ValidationCode::FieldConstraint))
}
