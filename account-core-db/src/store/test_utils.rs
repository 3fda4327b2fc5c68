use std::sync::Arc;

use account_core_api::{ManualClock, NewAccount, UuidV4Generator};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::memory::MemoryUnitOfWork;
use crate::models::AccountModel;
use crate::store::AccountStore;

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}

pub fn create_test_new_account(email: &str, username: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        username: username.to_string(),
        credential_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        phone_number: None,
        status: None,
    }
}

pub fn create_test_account_model(email: &str, username: &str) -> AccountModel {
    AccountModel::from_draft(
        Uuid::new_v4(),
        create_test_new_account(email, username).into_draft(),
        test_now(),
    )
    .unwrap()
}

pub struct TestStore {
    pub store: AccountStore<MemoryUnitOfWork>,
    pub unit_of_work: MemoryUnitOfWork,
    pub clock: Arc<ManualClock>,
}

/// Store over a fresh in-memory backend with a clock frozen at [`test_now`].
pub fn setup_test_store() -> TestStore {
    let unit_of_work = MemoryUnitOfWork::new();
    let clock = Arc::new(ManualClock::new(test_now()));
    let store = AccountStore::with_collaborators(
        unit_of_work.clone(),
        clock.clone(),
        Arc::new(UuidV4Generator),
    );
    TestStore {
        store,
        unit_of_work,
        clock,
    }
}
