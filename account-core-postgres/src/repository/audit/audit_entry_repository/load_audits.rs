use account_core_db::models::AuditEntryModel;
use account_core_db::repository::{LoadAudits, Page, PageRequest};
use crate::utils::TryFromRow;
use async_trait::async_trait;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AuditEntryRepositoryImpl;

impl AuditEntryRepositoryImpl {
    pub(super) async fn load_audits_impl(
        repo: &AuditEntryRepositoryImpl,
        account_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn Error + Send + Sync>> {
        let count_query = r#"SELECT COUNT(*) FROM account_audit WHERE account_id = $1"#;
        let query = r#"
            SELECT * FROM account_audit
            WHERE account_id = $1
            ORDER BY sequence ASC
            LIMIT $2 OFFSET $3
        "#;

        // LIMIT/OFFSET are BIGINT; saturate instead of wrapping negative
        let limit = i64::try_from(page.limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.offset).unwrap_or(i64::MAX);

        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = sqlx::query_scalar(count_query)
                .bind(account_id)
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(query)
                .bind(account_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(AuditEntryModel::try_from_row(&row)?);
        }

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

#[async_trait]
impl LoadAudits<AuditEntryModel> for AuditEntryRepositoryImpl {
    async fn load_audits(
        &self,
        subject_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<AuditEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_audits_impl(self, subject_id, page).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::account::account_repository::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use account_core_api::AuditAction;
    use account_core_db::models::AuditEntryModel;
    use account_core_db::repository::{Create, LoadAudits, PageRequest};
    use chrono::Duration;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    async fn test_load_audits() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account = ctx.accounts().create(&create_test_account()).await?;

        let actions = [
            AuditAction::Create,
            AuditAction::Login,
            AuditAction::Update,
            AuditAction::Logout,
        ];
        for (i, action) in actions.iter().enumerate() {
            let entry = AuditEntryModel {
                id: Uuid::new_v4(),
                account_id: account.id,
                action: *action,
                old_value: None,
                new_value: None,
                ip_address: None,
                created_at: account.created_at + Duration::seconds(i as i64),
            };
            ctx.audit_entries().create(&entry).await?;
        }

        let page = ctx
            .audit_entries()
            .load_audits(account.id, PageRequest::new(3, 0))
            .await?;
        assert_eq!(page.total, 4);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].action, AuditAction::Create);
        assert!(page.has_more());

        let page2 = ctx
            .audit_entries()
            .load_audits(account.id, PageRequest::new(3, 3))
            .await?;
        assert_eq!(page2.items.len(), 1);
        assert_eq!(page2.items[0].action, AuditAction::Logout);
        assert_eq!(page2.page_number(), 2);
        assert!(!page2.has_more());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    async fn test_load_audits_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;

        let page = ctx
            .audit_entries()
            .load_audits(Uuid::new_v4(), PageRequest::new(20, 0))
            .await?;

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.page_number(), 1);
        assert!(!page.has_more());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL at DATABASE_URL"]
    async fn test_load_audits_with_unbounded_page() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account = ctx.accounts().create(&create_test_account()).await?;
        let entry = AuditEntryModel {
            id: Uuid::new_v4(),
            account_id: account.id,
            action: AuditAction::Create,
            old_value: None,
            new_value: None,
            ip_address: None,
            created_at: account.created_at,
        };
        ctx.audit_entries().create(&entry).await?;

        let page = ctx
            .audit_entries()
            .load_audits(account.id, PageRequest::new(usize::MAX, 0))
            .await?;
        assert_eq!(page.items, vec![entry]);

        let beyond = ctx
            .audit_entries()
            .load_audits(account.id, PageRequest::new(10, usize::MAX))
            .await?;
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 1);

        Ok(())
    }
}
