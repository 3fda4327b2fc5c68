use crate::error::{ApiError, ApiResult, ValidationCode};

/// Pre-insert check: the credential hash must be present.
///
/// Reports `USR-102` without naming the field.
pub fn check_credential_present(credential_hash: &str) -> ApiResult<()> {
    if credential_hash.trim().is_empty() {
        return Err(ApiError::validation(ValidationCode::CredentialMissing));
    }
    Ok(())
}
