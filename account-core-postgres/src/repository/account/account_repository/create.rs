use account_core_db::models::AccountModel;
use account_core_db::repository::Create;
use crate::utils::map_write_error;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AccountRepositoryImpl,
        item: &AccountModel,
    ) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO account
            (id, email, username, credential_hash, first_name, last_name, date_of_birth, phone_number, status, failed_login_attempts, last_login_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(item.id)
        .bind(item.email.as_str())
        .bind(item.username.as_str())
        .bind(item.credential_hash.as_str())
        .bind(item.first_name.as_str())
        .bind(item.last_name.as_str())
        .bind(item.date_of_birth)
        .bind(item.phone_number.as_deref())
        .bind(item.status)
        .bind(item.failed_login_attempts)
        .bind(item.last_login_at)
        .bind(item.created_at)
        .bind(item.updated_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query
            .execute(&mut **transaction)
            .await
            .map_err(map_write_error)?;

        Ok(item.clone())
    }
}

#[async_trait]
impl Create<AccountModel> for AccountRepositoryImpl {
    async fn create(&self, item: &AccountModel) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
