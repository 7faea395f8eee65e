//! Run configuration
//!
//! Everything the pipeline needs to know about one invocation, built once
//! from the command line and passed down explicitly.

use std::path::PathBuf;

use serde::Serialize;

/// Default path of the limits file
pub const DEFAULT_LIMITS_PATH: &str = "limits.json";

/// Default path of the coverage report
pub const DEFAULT_COVERAGE_PATH: &str = "coverage.txt";

/// What the run does with the two mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fail when any observed value is below its limit
    #[default]
    Assert,
    /// Raise limits to any higher observed values and persist them
    Update,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assert => write!(f, "assert"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Configuration for a single gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Path to the limits file
    pub limits: PathBuf,
    /// Path to the coverage report
    pub coverage: PathBuf,
    /// Assert or update
    pub mode: Mode,
    /// Report failures without failing the run
    pub bypass: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limits: PathBuf::from(DEFAULT_LIMITS_PATH),
            coverage: PathBuf::from(DEFAULT_COVERAGE_PATH),
            mode: Mode::Assert,
            bypass: false,
        }
    }
}
