//! Check service - compares observed coverage against limits
//!
//! This service contains the pure comparison logic. Identifiers that only
//! appear on one side are ignored; everything below its limit is collected.

use crate::core::models::{CoverageMap, Violation, Violations};
use crate::error::GateError;

/// Find every identifier whose observed coverage is below its limit
///
/// This is pure business logic with no I/O.
///
/// # Arguments
///
/// * `observed` - Coverage measured by the current test run
/// * `limits` - Recorded minimum coverage per identifier
#[must_use]
pub fn find_violations(observed: &CoverageMap, limits: &CoverageMap) -> Violations {
    observed
        .iter()
        .filter_map(|(id, percentage)| {
            let limit = limits.get(id)?;
            (percentage < limit).then(|| Violation::new(id, percentage, limit))
        })
        .collect()
}

/// Assert that no observed coverage is below its limit
///
/// Fails with [`GateError::ThresholdViolation`] listing every violation.
pub fn check_coverage(observed: &CoverageMap, limits: &CoverageMap) -> Result<(), GateError> {
    let violations = find_violations(observed, limits);
    log::debug!(
        "compared {} observed identifier(s) against {} limit(s): {} violation(s)",
        observed.len(),
        limits.len(),
        violations.len()
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(GateError::ThresholdViolation(violations))
    }
}
