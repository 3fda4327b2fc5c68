use serde::{Deserialize, Serialize};

/// Account fields that must be unique across the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueField {
    Email,
    Username,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::Email => write!(f, "email"),
            UniqueField::Username => write!(f, "username"),
        }
    }
}
