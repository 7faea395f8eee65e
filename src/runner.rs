//! Gate pipeline
//!
//! Loads the limits and the coverage report, then either asserts or updates.
//! Load failures are returned as errors and always fail the run; a failure
//! of the assert/update step is kept in the [`RunReport`] so `--bypass` can
//! decide whether it fails the process.

use std::path::PathBuf;

use crate::adapters::{GoCoverReport, LimitsFile};
use crate::config::{Mode, RunConfig};
use crate::core::models::LimitChange;
use crate::core::ports::{CoverageSource, LimitsStore};
use crate::core::services::{check_coverage, update_limits};
use crate::error::GateError;

/// Process exit status for a passing (or bypassed) run
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status for a failing run
pub const EXIT_FAILURE: u8 = 1;

/// Outcome of a run whose inputs loaded successfully
#[derive(Debug)]
pub struct RunReport {
    /// Mode the run executed in
    pub mode: Mode,
    /// Limits file that was read (and possibly written)
    pub limits_path: PathBuf,
    /// Limits added or raised (update mode only)
    pub changes: Vec<LimitChange>,
    /// Failure of the assert/update step, if any
    pub failure: Option<GateError>,
    /// Whether a failure is being ignored because of `--bypass`
    pub bypassed: bool,
}

impl RunReport {
    /// Whether the assert/update step succeeded
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// Exit status for the process
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        if self.passed() || self.bypassed { EXIT_SUCCESS } else { EXIT_FAILURE }
    }
}

/// Run the gate against the files named in `config`
pub fn run(config: &RunConfig) -> Result<RunReport, GateError> {
    let store = LimitsFile::new(&config.limits);
    let source = GoCoverReport::new(&config.coverage);
    run_with(config, &store, &source)
}

/// Run the gate against explicit store and source implementations
pub fn run_with(
    config: &RunConfig,
    store: &dyn LimitsStore,
    source: &dyn CoverageSource,
) -> Result<RunReport, GateError> {
    let limits = store.load()?;
    let observed = source.load()?;
    log::debug!(
        "running in {} mode: {} limit(s), {} observed identifier(s)",
        config.mode,
        limits.len(),
        observed.len()
    );

    let (changes, failure) = match config.mode {
        Mode::Assert => (Vec::new(), check_coverage(&observed, &limits).err()),
        Mode::Update => match update_limits(&observed, &limits, store) {
            Ok(changes) => (changes, None),
            Err(err) => (Vec::new(), Some(err)),
        },
    };

    let bypassed = failure.is_some() && config.bypass;
    if bypassed {
        log::warn!("ignoring failure because --bypass is set");
    }

    Ok(RunReport {
        mode: config.mode,
        limits_path: store.location().to_path_buf(),
        changes,
        failure,
        bypassed,
    })
}
