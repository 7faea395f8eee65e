//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the files it reads and writes.
//!
//! Implementations live in the `adapters` module.

mod coverage_source;
mod limits_store;

pub use coverage_source::CoverageSource;
pub use limits_store::LimitsStore;
