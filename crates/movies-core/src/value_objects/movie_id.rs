//! Movie identifier - server-generated UUID in its textual form

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque movie identifier.
///
/// New ids are always random v4 UUIDs rendered as 36-character strings.
/// Ids coming back from the outside (path parameters) are kept verbatim and
/// never syntax-checked: an id that matches no row is simply "not found".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Length of a generated id (hyphenated UUID)
    pub const LEN: usize = 36;

    /// Generate a fresh, never-before-seen id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
