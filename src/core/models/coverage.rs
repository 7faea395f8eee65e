//! Coverage mapping
//!
//! A flat mapping from identifier (usually a package path) to a percentage.
//! Both the recorded limits and the observed coverage use this type.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// Lowest valid percentage
pub const MIN_PERCENTAGE: f64 = 0.0;

/// Highest valid percentage
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Whether `value` is a percentage in `[0, 100]` (NaN is not)
#[must_use]
pub fn is_valid_percentage(value: f64) -> bool {
    (MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&value)
}

/// Mapping from identifier to coverage percentage
///
/// Keys are kept sorted so rendering and serialization are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageMap(BTreeMap<String, f64>);

impl CoverageMap {
    /// Create an empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the percentage recorded for `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.get(id).copied()
    }

    /// Record a percentage, replacing any previous value for `id`
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, id: impl Into<String>, percentage: f64) -> Option<f64> {
        self.0.insert(id.into(), percentage)
    }

    /// Whether `id` has a recorded value
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(id, percentage)` pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(id, pct)| (id.as_str(), *pct))
    }

    /// First entry whose value is not a valid percentage
    #[must_use]
    pub fn first_out_of_range(&self) -> Option<(&str, f64)> {
        self.iter().find(|(_, pct)| !is_valid_percentage(*pct))
    }
}

impl FromIterator<(String, f64)> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, pct)| (id.to_string(), pct)).collect())
    }
}

impl IntoIterator for CoverageMap {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
