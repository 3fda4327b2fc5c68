use account_core_db::models::AuditEntryModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_optional_ip_address, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct AuditEntryRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AuditEntryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for AuditEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AuditEntryModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            action: row.try_get("action")?,
            old_value: row.try_get("old_value")?,
            new_value: row.try_get("new_value")?,
            ip_address: get_optional_ip_address(row, "ip_address")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
