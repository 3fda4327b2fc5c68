use async_trait::async_trait;
use uuid::Uuid;

use crate::models::account::AccountModel;
use crate::repository::{Create, Load, LoadBatch, Update};

/// Storage operations the account store needs on the `account` record set.
#[async_trait]
pub trait AccountRepository:
    Create<AccountModel> + Update<AccountModel> + Load<AccountModel> + LoadBatch<AccountModel>
{
    /// Loads the account and holds it against concurrent writers until the
    /// session ends.
    async fn load_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Exact match on the normalized (lower-cased) email.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Case-insensitive match on the username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>>;
}
