use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AccountStatus;

/// The writable fields of an account, normalized and ready for validation.
///
/// Both `create` and `update` reduce their input to a draft so the same
/// constraint checks run on every write. Bounds mirror the column widths of
/// the `account` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AccountDraft {
    #[validate(email, length(min = 1, max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 50))]
    pub username: String,

    /// Opaque hash from the credential hashing collaborator. Presence is checked
    /// separately by the pre-insert validation.
    #[validate(length(max = 255))]
    pub credential_hash: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1, max = 20))]
    pub phone_number: Option<String>,

    pub status: AccountStatus,

    #[validate(range(min = 0))]
    pub failed_login_attempts: i32,
}

/// Emails are compared case-insensitively, so they are stored lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Usernames keep their case; uniqueness is enforced on the lower-cased form.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}

pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Blank optional text is treated as absent.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
