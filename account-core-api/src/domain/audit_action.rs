use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "audit_action", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    PasswordChange,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Create => write!(f, "create"),
            AuditAction::Update => write!(f, "update"),
            AuditAction::Delete => write!(f, "delete"),
            AuditAction::Login => write!(f, "login"),
            AuditAction::Logout => write!(f, "logout"),
            AuditAction::PasswordChange => write!(f, "password_change"),
        }
    }
}

impl FromStr for AuditAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            "login" => Ok(AuditAction::Login),
            "logout" => Ok(AuditAction::Logout),
            "password_change" => Ok(AuditAction::PasswordChange),
            _ => Err(()),
        }
    }
}

/// Authentication events that are audited without going through `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEvent {
    Login,
    Logout,
    PasswordChange,
}

impl From<AuthEvent> for AuditAction {
    fn from(event: AuthEvent) -> Self {
        match event {
            AuthEvent::Login => AuditAction::Login,
            AuthEvent::Logout => AuditAction::Logout,
            AuthEvent::PasswordChange => AuditAction::PasswordChange,
        }
    }
}
