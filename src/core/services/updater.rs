//! Update service - raises limits to improved coverage
//!
//! Limits only ever move up. New identifiers are added at their observed
//! value; identifiers missing from the report keep their limit.

use crate::core::models::{CoverageMap, LimitChange};
use crate::core::ports::LimitsStore;
use crate::error::GateError;

/// Result of raising limits
#[derive(Debug, Clone, PartialEq)]
pub struct RaisedLimits {
    /// The complete new set of limits
    pub limits: CoverageMap,
    /// Limits that were added or raised
    pub changes: Vec<LimitChange>,
}

impl RaisedLimits {
    /// Whether anything changed
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Compute the new limits for `observed` coverage
///
/// This is pure business logic with no I/O. A limit is replaced when it is
/// absent or strictly lower than the observed value.
#[must_use]
pub fn raise_limits(observed: &CoverageMap, limits: &CoverageMap) -> RaisedLimits {
    let mut raised = limits.clone();
    let mut changes = Vec::new();

    for (id, percentage) in observed.iter() {
        let previous = limits.get(id);
        if previous.is_none_or(|limit| limit < percentage) {
            raised.insert(id, percentage);
            changes.push(LimitChange {
                id: id.to_string(),
                previous,
                current: percentage,
            });
        }
    }

    RaisedLimits {
        limits: raised,
        changes,
    }
}

/// Raise limits and persist them when anything changed
///
/// Returns the changes that were written. Nothing is written when no limit
/// moved.
pub fn update_limits(
    observed: &CoverageMap,
    limits: &CoverageMap,
    store: &dyn LimitsStore,
) -> Result<Vec<LimitChange>, GateError> {
    let raised = raise_limits(observed, limits);

    if !raised.is_changed() {
        log::debug!("no limits raised; leaving {} untouched", store.location().display());
        return Ok(Vec::new());
    }

    for change in &raised.changes {
        log::debug!("{change}");
    }
    store.save(&raised.limits)?;
    log::info!(
        "wrote {} limit(s) to {} ({} changed)",
        raised.limits.len(),
        store.location().display(),
        raised.changes.len()
    );

    Ok(raised.changes)
}
