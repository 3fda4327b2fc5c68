use account_core_db::models::AccountModel;
use account_core_db::repository::Update;
use crate::utils::map_write_error;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &AccountRepositoryImpl,
        item: &AccountModel,
    ) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE account SET
                email = $2,
                username = $3,
                credential_hash = $4,
                first_name = $5,
                last_name = $6,
                date_of_birth = $7,
                phone_number = $8,
                status = $9,
                failed_login_attempts = $10,
                last_login_at = $11,
                updated_at = $12
            WHERE id = $1
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
        .bind(item.updated_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = query
            .execute(&mut **transaction)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err("Entity not found".into());
        }

        Ok(item.clone())
    }
}

#[async_trait]
impl Update<AccountModel> for AccountRepositoryImpl {
    async fn update(&self, item: &AccountModel) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
