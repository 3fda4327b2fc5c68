//! Write-time validation for accounts.
//!
//! Two independent stages run in order on every write:
//! 1. [`check_constraints`]: the column-level rules a storage engine would enforce
//!    (required fields, formats, bounds, minimum age). Uniqueness belongs to this
//!    stage too but needs the store, so the store runs it in between.
//! 2. [`check_credential_present`]: the pre-insert check on the credential hash.

pub mod constraints;
pub mod credential;

pub use constraints::*;
pub use credential::*;
