use account_core_api::{AccountStatus, NewAccount};
use account_core_db::models::AccountModel;
use chrono::{NaiveDate, SubsecRound, Utc};
use uuid::Uuid;

use crate::test_helper::random;

/// New account with random, collision-free email and username
pub fn create_test_new_account() -> NewAccount {
    let tag = random(12).to_lowercase();
    NewAccount {
        email: format!("{tag}@example.com"),
        username: format!("user_{tag}"),
        credential_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        phone_number: Some("+15550100".to_string()),
        status: Some(AccountStatus::Active),
    }
}

pub fn create_test_account() -> AccountModel {
    let now = Utc::now().trunc_subsecs(6);
    AccountModel::from_draft(Uuid::new_v4(), create_test_new_account().into_draft(), now).unwrap()
}
