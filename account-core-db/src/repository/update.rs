use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing a stored entity with a new state
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<T: Identifiable>: Send + Sync {
    /// Overwrite the stored entity that has the same ID as `item`
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err` - A [`UniqueViolation`](super::UniqueViolation) if a unique field
    ///   collides, an error if no entity has that ID, otherwise the storage error
    async fn update(&self, item: &T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
