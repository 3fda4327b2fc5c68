use account_core_api::UniqueField;
use thiserror::Error;

/// Returned (boxed) by repositories when a write collides on a unique field.
///
/// The store downcasts to this type to report a conflict instead of a storage
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unique constraint violated on {field}")]
pub struct UniqueViolation {
    pub field: UniqueField,
}

impl UniqueViolation {
    pub fn new(field: UniqueField) -> Self {
        Self { field }
    }
}
