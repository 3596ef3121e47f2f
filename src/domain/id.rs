//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chat identifier supplied by the chat platform.
///
/// Each chat tracks at most one target, so this is the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChatKey(i64);

impl ChatKey {
    /// Create a new `ChatKey` from the platform's numeric id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatKey {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}
