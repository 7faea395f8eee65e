//! covgate - Assert that unit test coverage never drops below recorded limits
//!
//! This library provides the pieces of the coverage gate: a reader for the
//! per-package limits file, a parser for `go test -cover` style reports, the
//! comparison and limit-raising services, and output rendering.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod runner;

pub use config::{Mode, RunConfig};
pub use error::{ErrorKind, GateError};
