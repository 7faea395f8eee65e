//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `limits_file` - limits stored as a JSON (or TOML) file
//! - `go_report` - coverage read from a `go test -cover` report

pub mod go_report;
pub mod limits_file;

pub use go_report::{GoCoverReport, parse_line, parse_percentage, parse_report};
pub use limits_file::{LimitsFile, LimitsFormat};
