use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// The insert runs inside the transaction of the session that built the
/// repository; nothing is visible to other sessions until that session commits.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    /// Insert an item
    ///
    /// # Arguments
    /// * `item` - The entity to insert
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err` - A [`UniqueViolation`](super::UniqueViolation) if a unique field
    ///   collides, otherwise the storage error
    async fn create(&self, item: &T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
