use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account_draft::{normalize_optional_text, normalize_text};
use super::{normalize_email, normalize_username, AccountDraft, AccountStatus, UniqueField};

/// Partial update. `None` leaves a field untouched.
///
/// `phone_number` is doubly optional: `Some(None)` clears the number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub credential_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<Option<String>>,
    pub status: Option<AccountStatus>,
    pub failed_login_attempts: Option<i32>,
}

impl AccountPatch {
    /// Patch touching only `status`, used by `change_status`.
    pub fn status(status: AccountStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the patch and returns the unique fields whose value changed.
    pub fn apply_to(self, draft: &mut AccountDraft) -> Vec<UniqueField> {
        let mut changed_unique = Vec::new();

        if let Some(email) = self.email {
            let email = normalize_email(&email);
            if email != draft.email {
                changed_unique.push(UniqueField::Email);
            }
            draft.email = email;
        }
        if let Some(username) = self.username {
            let username = normalize_username(&username);
            if username.to_lowercase() != draft.username.to_lowercase() {
                changed_unique.push(UniqueField::Username);
            }
            draft.username = username;
        }
        if let Some(credential_hash) = self.credential_hash {
            draft.credential_hash = credential_hash;
        }
        if let Some(first_name) = self.first_name {
            draft.first_name = normalize_text(&first_name);
        }
        if let Some(last_name) = self.last_name {
            draft.last_name = normalize_text(&last_name);
        }
        if let Some(date_of_birth) = self.date_of_birth {
            draft.date_of_birth = date_of_birth;
        }
        if let Some(phone_number) = self.phone_number {
            draft.phone_number = normalize_optional_text(phone_number.as_deref());
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(failed_login_attempts) = self.failed_login_attempts {
            draft.failed_login_attempts = failed_login_attempts;
        }

        changed_unique
    }
}
