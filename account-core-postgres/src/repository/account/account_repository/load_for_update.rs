use account_core_db::models::AccountModel;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    /// Row lock held until the session's transaction ends.
    pub(super) async fn load_for_update_impl(
        repo: &AccountRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT * FROM account WHERE id = $1 FOR UPDATE"#;
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.map(|row| AccountModel::try_from_row(&row)).transpose()
    }
}
