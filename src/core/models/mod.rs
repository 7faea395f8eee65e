//! Domain models for covgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CoverageMap`] - identifier to percentage, used for limits and observations
//! - [`Violation`] - "this package is below its limit"
//! - [`LimitChange`] - "this limit was added or raised"

mod change;
mod coverage;
mod violation;

pub use change::LimitChange;
pub use coverage::{CoverageMap, MAX_PERCENTAGE, MIN_PERCENTAGE, is_valid_percentage};
pub use violation::{Violation, Violations};
