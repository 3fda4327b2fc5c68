use account_core_db::models::AccountModel;
use crate::utils::TryFromRow;
use std::error::Error;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    /// Served by the `account_username_unique` expression index.
    pub(super) async fn find_by_username_impl(
        repo: &AccountRepositoryImpl,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT * FROM account WHERE LOWER(username) = LOWER($1)"#;
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(username).fetch_optional(&mut **transaction).await?
        };

        row.map(|row| AccountModel::try_from_row(&row)).transpose()
    }
}
