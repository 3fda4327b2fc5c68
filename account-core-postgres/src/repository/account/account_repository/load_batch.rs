use account_core_db::models::AccountModel;
use account_core_db::repository::LoadBatch;
use crate::utils::TryFromRow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &AccountRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AccountModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM account WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::new();
        for row in rows {
            let item = AccountModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<AccountModel> for AccountRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<AccountModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
