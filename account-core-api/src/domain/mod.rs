pub mod account_draft;
pub mod account_patch;
pub mod account_status;
pub mod audit_action;
pub mod new_account;
pub mod unique_field;

pub use account_draft::*;
pub use account_patch::*;
pub use account_status::*;
pub use audit_action::*;
pub use new_account::*;
pub use unique_field::*;
