//! Coverage violations
//!
//! A violation records an identifier whose observed coverage is below its
//! limit. The rendering is fixed: one violation per line.

use std::fmt;

use serde::Serialize;

/// A single identifier below its limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The identifier (package path)
    pub id: String,
    /// Observed coverage percentage
    pub observed: f64,
    /// Recorded limit
    pub limit: f64,
}

impl Violation {
    /// Create a new violation
    #[must_use]
    pub fn new(id: impl Into<String>, observed: f64, limit: f64) -> Self {
        Self {
            id: id.into(),
            observed,
            limit,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coverage for {} is {:.2} but expected to be >= {:.2}",
            self.id, self.observed, self.limit
        )
    }
}

/// All violations found in one comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a violation
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Number of violations
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no violations
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over violations
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Find the violation for `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Violation> {
        self.0.iter().find(|v| v.id == id)
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
