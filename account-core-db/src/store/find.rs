use account_core_api::{normalize_email, normalize_username, ApiResult};
use tracing::debug;
use uuid::Uuid;

use super::account_store::repository_error;
use crate::models::AccountModel;
use crate::repository::{AccountRepository, Load, UnitOfWork, UnitOfWorkSession};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Absence is `Ok(None)`. Soft-deleted accounts are returned with status
    /// `deleted`.
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<AccountModel>> {
        let session = self.begin().await?;
        let result = session.accounts().load(id).await.map_err(repository_error);
        debug!(account_id = %id, found = matches!(result, Ok(Some(_))), "find_by_id");
        Self::finish(session, result).await
    }

    /// Case-insensitive lookup by email
    pub async fn find_by_email(&self, email: &str) -> ApiResult<Option<AccountModel>> {
        let email = normalize_email(email);
        let session = self.begin().await?;
        let result = session
            .accounts()
            .find_by_email(&email)
            .await
            .map_err(repository_error);
        debug!(%email, found = matches!(result, Ok(Some(_))), "find_by_email");
        Self::finish(session, result).await
    }

    /// Case-insensitive lookup by username
    pub async fn find_by_username(&self, username: &str) -> ApiResult<Option<AccountModel>> {
        let username = normalize_username(username);
        let session = self.begin().await?;
        let result = session
            .accounts()
            .find_by_username(&username)
            .await
            .map_err(repository_error);
        debug!(%username, found = matches!(result, Ok(Some(_))), "find_by_username");
        Self::finish(session, result).await
    }
}
