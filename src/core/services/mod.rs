//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results. Persistence goes through
//! the [`LimitsStore`](crate::core::ports::LimitsStore) port.
//!
//! - [`checker`] - Compare observed coverage against limits
//! - [`updater`] - Raise limits to improved coverage

pub mod checker;
pub mod updater;

pub use checker::{check_coverage, find_violations};
pub use updater::{RaisedLimits, raise_limits, update_limits};
