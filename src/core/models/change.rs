//! Limit changes produced by an update run

use std::fmt;

use serde::Serialize;

/// A limit that was added or raised
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitChange {
    /// The identifier (package path)
    pub id: String,
    /// Limit before the update (`None` when newly added)
    pub previous: Option<f64>,
    /// Limit after the update
    pub current: f64,
}

impl LimitChange {
    /// Whether this change introduced a new identifier
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.previous.is_none()
    }
}

impl fmt::Display for LimitChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.previous {
            Some(previous) => write!(
                f,
                "raised limit for {} from {:.2} to {:.2}",
                self.id, previous, self.current
            ),
            None => write!(f, "added limit for {} at {:.2}", self.id, self.current),
        }
    }
}
