pub mod account_repository;
pub mod audit_entry_repository;
pub mod create;
pub mod load;
pub mod load_audits;
pub mod load_batch;
pub mod pagination;
pub mod unique_violation;
pub mod unit_of_work;
pub mod update;

// Re-exports
pub use account_repository::*;
pub use audit_entry_repository::*;
pub use create::*;
pub use load::*;
pub use load_audits::*;
pub use load_batch::*;
pub use pagination::*;
pub use unique_violation::*;
pub use unit_of_work::*;
pub use update::*;
