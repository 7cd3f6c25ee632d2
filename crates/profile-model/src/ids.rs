use std::fmt;

use serde::{Deserialize, Serialize};

/// A user identifier as stored by the profile service.
///
/// The store is loose about the wire type: legacy records carry numeric ids,
/// newer ones carry strings. Both forms round-trip unchanged, and two ids
/// compare equal only when both the form and the value match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
