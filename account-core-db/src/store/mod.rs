//! The account store: validation, persistence and auditing of accounts, one
//! transaction per operation.

pub mod account_store;
pub mod auth_event;
pub mod create;
pub mod delete;
pub mod find;
pub mod load_audits;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use account_store::AccountStore;
