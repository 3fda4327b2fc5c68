use std::net::IpAddr;

use account_core_api::AuditAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{AuditRecord, Identifiable};

/// # Documentation
/// - One entry per account mutation or authentication event.
/// - Written in the same unit of work as the mutation it describes.
/// - `old_value` is absent on create, `new_value` is absent on delete. Both are absent
///   for authentication events.
/// - `account_id` is a lookup-only back-reference; accounts are never physically
///   removed so it always resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntryModel {
    pub id: Uuid,
    pub account_id: Uuid,
    pub action: AuditAction,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub ip_address: Option<IpAddr>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for AuditEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl AuditRecord for AuditEntryModel {
    fn get_subject_id(&self) -> Uuid {
        self.account_id
    }
}
