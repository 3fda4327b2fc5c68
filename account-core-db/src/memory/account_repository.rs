use std::sync::Arc;

use account_core_api::UniqueField;
use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use super::MemoryState;
use crate::models::AccountModel;
use crate::repository::{AccountRepository, Create, Load, LoadBatch, UniqueViolation, Update};

pub struct MemoryAccountRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryAccountRepository {
    pub(crate) fn new(state: Arc<Mutex<MemoryState>>) -> Self {
        Self { state }
    }
}

/// Same rules as the `account` table's unique constraints.
fn check_unique(state: &MemoryState, item: &AccountModel) -> Result<(), UniqueViolation> {
    let username = item.username.to_lowercase();
    for other in state.accounts.values().filter(|a| a.id != item.id) {
        if other.email == item.email {
            return Err(UniqueViolation::new(UniqueField::Email));
        }
        if other.username.to_lowercase() == username {
            return Err(UniqueViolation::new(UniqueField::Username));
        }
    }
    Ok(())
}

#[async_trait]
impl Create<AccountModel> for MemoryAccountRepository {
    async fn create(
        &self,
        item: &AccountModel,
    ) -> Result<AccountModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock();
        if state.accounts.contains_key(&item.id) {
            return Err(format!("Account {} already exists", item.id).into());
        }
        check_unique(&state, item)?;
        state.accounts.insert(item.id, item.clone());
        Ok(item.clone())
    }
}

#[async_trait]
impl Update<AccountModel> for MemoryAccountRepository {
    async fn update(
        &self,
        item: &AccountModel,
    ) -> Result<AccountModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.state.lock();
        if !state.accounts.contains_key(&item.id) {
            return Err("Entity not found".into());
        }
        check_unique(&state, item)?;
        state.accounts.insert(item.id, item.clone());
        Ok(item.clone())
    }
}

#[async_trait]
impl Load<AccountModel> for MemoryAccountRepository {
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.state.lock().accounts.get(&id).cloned())
    }
}

#[async_trait]
impl LoadBatch<AccountModel> for MemoryAccountRepository {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AccountModel>>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(ids.iter().map(|id| state.accounts.get(id).cloned()).collect())
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn load_for_update(
        &self,
        id: Uuid,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        // the session already holds the store-wide lock
        self.load(id).await
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        let state = self.state.lock();
        Ok(state
            .accounts
            .values()
            .find(|a| a.email.as_str() == email)
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>> {
        let username = username.to_lowercase();
        let state = self.state.lock();
        Ok(state
            .accounts
            .values()
            .find(|a| a.username.to_lowercase() == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryUnitOfWork;
    use crate::repository::{
        AccountRepository, Create, LoadBatch, UniqueViolation, UnitOfWork, UnitOfWorkSession,
        Update,
    };
    use crate::store::test_utils::create_test_account_model;
    use account_core_api::UniqueField;

    #[tokio::test]
    async fn test_create_rejects_duplicate_username_ignoring_case(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let uow = MemoryUnitOfWork::new();
        let session = uow.begin().await?;
        session
            .accounts()
            .create(&create_test_account_model("a@x.com", "Alice"))
            .await?;

        let err = session
            .accounts()
            .create(&create_test_account_model("b@x.com", "ALICE"))
            .await
            .unwrap_err();
        let violation = err.downcast_ref::<UniqueViolation>().expect("unique violation");
        assert_eq!(violation.field, UniqueField::Username);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_may_keep_its_own_unique_values(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let uow = MemoryUnitOfWork::new();
        let session = uow.begin().await?;
        let mut account = create_test_account_model("a@x.com", "alice");
        session.accounts().create(&account).await?;

        account.first_name = heapless::String::try_from("Alicia").unwrap();
        let saved = session.accounts().update(&account).await?;
        assert_eq!(saved.first_name.as_str(), "Alicia");
        Ok(())
    }

    #[tokio::test]
    async fn test_uncommitted_writes_are_discarded() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let uow = MemoryUnitOfWork::new();
        let account = create_test_account_model("a@x.com", "alice");
        {
            let session = uow.begin().await?;
            session.accounts().create(&account).await?;
            assert!(session.accounts().find_by_email("a@x.com").await?.is_some());
        }
        let session = uow.begin().await?;
        let loaded = session.accounts().load_batch(&[account.id]).await?;
        assert_eq!(loaded, vec![None]);
        // release the store lock before inspecting committed state
        session.rollback().await?;
        assert_eq!(uow.account_count().await, 0);
        Ok(())
    }
}
