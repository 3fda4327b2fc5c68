use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::UniqueField;

/// Stable codes carried by [`ApiError::ValidationError`].
///
/// The rendered message only ever names the code. Callers that need to tell rules
/// apart match on the variant; end users see an opaque `USR-1xx` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    /// Required field missing, malformed or out of bounds.
    FieldConstraint,
    /// Date of birth is later than the minimum-age cutoff.
    MinimumAge,
    /// Credential hash absent or empty.
    CredentialMissing,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::FieldConstraint => "USR-100",
            ValidationCode::MinimumAge => "USR-101",
            ValidationCode::CredentialMissing => "USR-102",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Validation error: {code}")]
    ValidationError { code: ValidationCode },

    #[error("Conflict: {0} is already in use")]
    Conflict(UniqueField),

    #[error("Not found: {0}")]
    NotFound(Uuid),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    pub fn validation(code: ValidationCode) -> Self {
        ApiError::ValidationError { code }
    }

    /// Returns the validation code when this is a validation failure.
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match self {
            ApiError::ValidationError { code } => Some(*code),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
