use crate::models::audit::AuditEntryModel;
use crate::repository::{Create, LoadAudits};

/// Storage operations on the append-only `account_audit` record set.
pub trait AuditEntryRepository: Create<AuditEntryModel> + LoadAudits<AuditEntryModel> {}

impl<T> AuditEntryRepository for T where T: Create<AuditEntryModel> + LoadAudits<AuditEntryModel> {}
