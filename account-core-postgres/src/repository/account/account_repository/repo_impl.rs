use account_core_db::models::AccountModel;
use account_core_db::repository::{AccountRepository, Load, LoadBatch};
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use uuid::Uuid;

pub struct AccountRepositoryImpl {
    pub executor: Executor,
}

impl AccountRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountModel {
            id: row.try_get("id")?,
            email: get_heapless_string(row, "email")?,
            username: get_heapless_string(row, "username")?,
            credential_hash: get_heapless_string(row, "credential_hash")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            date_of_birth: row.try_get("date_of_birth")?,
            phone_number: get_optional_heapless_string(row, "phone_number")?,
            status: row.try_get("status")?,
            failed_login_attempts: row.try_get("failed_login_attempts")?,
            last_login_at: row.try_get("last_login_at")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl Load<AccountModel> for AccountRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn load_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        Self::load_for_update_impl(self, id).await
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_email_impl(self, email).await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_username_impl(self, username).await
    }
}
