use uuid::Uuid;

use super::identifiable::Identifiable;

/// Trait for audit records that describe another entity
pub trait AuditRecord: Identifiable {
    /// Returns the ID of the entity this record describes
    fn get_subject_id(&self) -> Uuid;
}
