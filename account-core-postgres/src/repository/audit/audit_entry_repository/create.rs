use account_core_db::models::AuditEntryModel;
use account_core_db::repository::Create;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::AuditEntryRepositoryImpl;

impl AuditEntryRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AuditEntryRepositoryImpl,
        entry: &AuditEntryModel,
    ) -> Result<AuditEntryModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO account_audit (id, account_id, action, old_value, new_value, ip_address, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id)
        .bind(entry.account_id)
        .bind(entry.action)
        .bind(entry.old_value.clone())
        .bind(entry.new_value.clone())
        .bind(entry.ip_address.map(|ip| ip.to_string()))
        .bind(entry.created_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(entry.clone())
    }
}

#[async_trait]
impl Create<AuditEntryModel> for AuditEntryRepositoryImpl {
    async fn create(&self, item: &AuditEntryModel) -> Result<AuditEntryModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
