use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account_draft::{normalize_optional_text, normalize_text};
use super::{normalize_email, normalize_username, AccountDraft, AccountStatus};

/// Caller-supplied fields for `create`.
///
/// `credential_hash` is optional here so that a missing hash reaches the
/// pre-insert validation and is reported as `USR-102`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub credential_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: Option<String>,
    pub status: Option<AccountStatus>,
}

impl NewAccount {
    pub fn into_draft(self) -> AccountDraft {
        AccountDraft {
            email: normalize_email(&self.email),
            username: normalize_username(&self.username),
            credential_hash: self.credential_hash.unwrap_or_default(),
            first_name: normalize_text(&self.first_name),
            last_name: normalize_text(&self.last_name),
            date_of_birth: self.date_of_birth,
            phone_number: normalize_optional_text(self.phone_number.as_deref()),
            status: self.status.unwrap_or_default(),
            failed_login_attempts: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account() -> NewAccount {
        NewAccount {
            email: " A@X.com".to_string(),
            username: "a ".to_string(),
            credential_hash: None,
            first_name: " A".to_string(),
            last_name: "B".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            phone_number: Some(String::new()),
            status: None,
        }
    }

    #[test]
    fn test_into_draft_applies_defaults() {
        let draft = new_account().into_draft();
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.username, "a");
        assert_eq!(draft.first_name, "A");
        assert_eq!(draft.credential_hash, "");
        assert_eq!(draft.phone_number, None);
        assert_eq!(draft.status, AccountStatus::Active);
        assert_eq!(draft.failed_login_attempts, 0);
    }

    #[test]
    fn test_into_draft_keeps_explicit_status() {
        let mut input = new_account();
        input.status = Some(AccountStatus::Inactive);
        assert_eq!(input.into_draft().status, AccountStatus::Inactive);
    }

    #[test]
    fn test_credential_hash_is_stored_as_given() {
        let mut input = new_account();
        input.credential_hash = Some(" opaque-hash== ".to_string());
        assert_eq!(input.into_draft().credential_hash, " opaque-hash== ");
    }
}
