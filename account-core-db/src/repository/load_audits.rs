use async_trait::async_trait;
use uuid::Uuid;

use crate::models::auditable::AuditRecord;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for loading the audit records of one entity with pagination
///
/// Records come back oldest first.
///
/// # Example
/// ```ignore
/// use account_core_db::repository::pagination::PageRequest;
///
/// let page = repo.load_audits(account_id, PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait LoadAudits<A: AuditRecord>: Send + Sync {
    /// Load paginated audit records for an entity by its unique identifier
    ///
    /// # Arguments
    /// * `subject_id` - The UUID of the entity whose audit records should be loaded
    /// * `page` - The pagination parameters (limit and offset)
    async fn load_audits(
        &self,
        subject_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<A>, Box<dyn std::error::Error + Send + Sync>>;
}
