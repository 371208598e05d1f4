//! Opaque record identifiers.
//!
//! The API is free to hand out numeric or string ids. The client never
//! interprets them, it only compares them and puts them back into paths and
//! payloads, so both shapes are kept exactly as received.

use serde::{Deserialize, Serialize};

/// Record identifier as sent by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Records that carry an [`Id`].
pub trait Keyed {
    fn id(&self) -> &Id;
}

/// Put a server-confirmed record at the head of a locally held list.
pub fn prepend<T>(list: &mut Vec<T>, item: T) {
    list.insert(0, item);
}

/// Remove every record whose id equals `id`.
///
/// Returns `true` if anything was removed.
pub fn remove_by_id<T: Keyed>(list: &mut Vec<T>, id: &Id) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}
