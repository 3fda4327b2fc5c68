pub mod account;
pub mod audit;
pub mod auditable;
pub mod identifiable;

// Re-exports
pub use account::*;
pub use audit::*;
pub use auditable::*;
pub use identifiable::*;
