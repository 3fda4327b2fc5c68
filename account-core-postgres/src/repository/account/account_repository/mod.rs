pub mod repo_impl;
pub mod create;
pub mod update;
pub mod load_batch;
pub mod load_for_update;
pub mod find_by_email;
pub mod find_by_username;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AccountRepositoryImpl;
