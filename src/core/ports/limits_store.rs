//! Limits store port
//!
//! Defines the interface for loading and persisting coverage limits.

use std::path::Path;

use crate::core::models::CoverageMap;
use crate::error::GateError;

/// Persistent store for per-identifier coverage limits
///
/// The store is read in full at the start of a run and, in update mode,
/// rewritten in full at the end.
pub trait LimitsStore {
    /// Where the limits live (used in messages)
    fn location(&self) -> &Path;

    /// Load all limits
    fn load(&self) -> Result<CoverageMap, GateError>;

    /// Replace all limits with `limits`
    fn save(&self, limits: &CoverageMap) -> Result<(), GateError>;
}
