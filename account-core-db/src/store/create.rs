use account_core_api::validation::{check_constraints, check_credential_present};
use account_core_api::{AccountDraft, ApiResult, AuditAction, NewAccount, UniqueField};
use tracing::info;

use super::account_store::{log_rejection, repository_error, PendingAudit};
use crate::models::AccountModel;
use crate::repository::{Create, UnitOfWork, UnitOfWorkSession};
use crate::store::AccountStore;

impl<U: UnitOfWork> AccountStore<U> {
    /// Creates an account and its `create` audit entry.
    ///
    /// Checks run in two stages: storage-level constraints (fields, age,
    /// uniqueness), then the pre-insert credential check.
    pub async fn create(&self, new_account: NewAccount) -> ApiResult<AccountModel> {
        let result = self.create_impl(new_account).await;
        match &result {
            Ok(account) => info!(account_id = %account.id, "account created"),
            Err(err) => log_rejection("create", None, err),
        }
        result
    }

    async fn create_impl(&self, new_account: NewAccount) -> ApiResult<AccountModel> {
        let draft = new_account.into_draft();
        check_constraints(&draft, self.clock.today())?;

        let session = self.begin().await?;
        let result = self.create_in_session(&session, draft).await;
        Self::finish(session, result).await
    }

    async fn create_in_session(
        &self,
        session: &U::Session,
        draft: AccountDraft,
    ) -> ApiResult<AccountModel> {
        self.check_unique(session, &draft, &[UniqueField::Email, UniqueField::Username], None)
            .await?;
        check_credential_present(&draft.credential_hash)?;

        let now = self.clock.now();
        let account = AccountModel::from_draft(self.id_generator.next_id(), draft, now)?;
        let saved = session
            .accounts()
            .create(&account)
            .await
            .map_err(repository_error)?;

        self.append_audit(
            session,
            saved.id,
            PendingAudit {
                action: AuditAction::Create,
                old_value: None,
                new_value: Some(saved.snapshot()?),
                ip_address: None,
                at: now,
            },
        )
        .await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::PageRequest;
    use crate::store::test_utils::{create_test_new_account, setup_test_store, test_now};
    use account_core_api::{AccountStatus, ApiError, AuditAction, UniqueField, ValidationCode};
    use chrono::{Months, NaiveDate};

    #[tokio::test]
    async fn test_create_then_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();

        let created = ctx.store.create(create_test_new_account("a@x.com", "a")).await?;

        assert_eq!(created.status, AccountStatus::Active);
        assert_eq!(created.failed_login_attempts, 0);
        assert_eq!(created.created_at, test_now());
        assert_eq!(created.updated_at, test_now());
        let found = ctx.store.find_by_id(created.id).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_writes_one_create_audit_entry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();

        let created = ctx.store.create(create_test_new_account("a@x.com", "a")).await?;

        let audits = ctx.store.load_audits(created.id, PageRequest::default()).await?;
        assert_eq!(audits.total, 1);
        let entry = &audits.items[0];
        assert_eq!(entry.action, AuditAction::Create);
        assert_eq!(entry.old_value, None);
        assert_eq!(entry.new_value, Some(created.snapshot()?));
        assert_eq!(entry.created_at, created.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();
        ctx.store.create(create_test_new_account("a@x.com", "a")).await?;

        let err = ctx
            .store
            .create(create_test_new_account("A@X.COM", "other"))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Conflict(UniqueField::Email));
        assert_eq!(ctx.unit_of_work.account_count().await, 1);
        assert_eq!(ctx.unit_of_work.audit_entry_count().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();
        ctx.store.create(create_test_new_account("a@x.com", "alice")).await?;

        let err = ctx
            .store
            .create(create_test_new_account("b@x.com", "Alice"))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Conflict(UniqueField::Username));
        Ok(())
    }

    #[tokio::test]
    async fn test_minimum_age_boundary() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();
        let cutoff = test_now().date_naive() - Months::new(13 * 12);

        let mut too_young = create_test_new_account("young@x.com", "young");
        too_young.date_of_birth = cutoff.succ_opt().unwrap();
        let err = ctx.store.create(too_young).await.unwrap_err();
        assert_eq!(err.validation_code(), Some(ValidationCode::MinimumAge));

        let mut exactly_thirteen = create_test_new_account("teen@x.com", "teen");
        exactly_thirteen.date_of_birth = cutoff;
        let created = ctx.store.create(exactly_thirteen).await?;
        assert_eq!(created.date_of_birth, NaiveDate::from_ymd_opt(2011, 6, 10).unwrap());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_credential_leaves_no_trace() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();

        for credential_hash in [None, Some(String::new())] {
            let mut input = create_test_new_account("a@x.com", "a");
            input.credential_hash = credential_hash;
            let err = ctx.store.create(input).await.unwrap_err();
            assert_eq!(err.validation_code(), Some(ValidationCode::CredentialMissing));
            assert_eq!(err.to_string(), "Validation error: USR-102");
        }

        assert_eq!(ctx.unit_of_work.account_count().await, 0);
        assert_eq!(ctx.unit_of_work.audit_entry_count().await, 0);
        assert_eq!(ctx.store.find_by_email("a@x.com").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_uniqueness_is_checked_before_credential() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();
        ctx.store.create(create_test_new_account("a@x.com", "a")).await?;

        let mut input = create_test_new_account("a@x.com", "b");
        input.credential_hash = None;
        let err = ctx.store.create(input).await.unwrap_err();

        assert_eq!(err, ApiError::Conflict(UniqueField::Email));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();

        let err = ctx
            .store
            .create(create_test_new_account("not-an-email", "a"))
            .await
            .unwrap_err();

        assert_eq!(err.validation_code(), Some(ValidationCode::FieldConstraint));
        assert_eq!(ctx.unit_of_work.account_count().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_email() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_store();

        let (first, second) = tokio::join!(
            ctx.store.create(create_test_new_account("race@x.com", "racer1")),
            ctx.store.create(create_test_new_account("race@x.com", "racer2")),
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| r == &Err(ApiError::Conflict(UniqueField::Email))));
        assert_eq!(ctx.unit_of_work.account_count().await, 1);
        Ok(())
    }
}
