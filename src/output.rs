//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Human output goes to
//! stdout and is empty for a passing assert run.

use colored::Colorize;
use serde::Serialize;

use crate::config::Mode;
use crate::core::models::{LimitChange, Violation};
use crate::runner::RunReport;

/// First line of the human rendering of threshold violations
pub const VIOLATIONS_HEADER: &str = "coverage errors:";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a run whose inputs loaded
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Assert or update
    pub mode: Mode,
    /// Whether the assert/update step succeeded
    pub passed: bool,
    /// Whether a failure was ignored because of `--bypass`
    pub bypassed: bool,
    /// Limits file the run used
    pub limits: String,
    /// Identifiers below their limit
    pub violations: Vec<Violation>,
    /// Limits that were added or raised
    pub changes: Vec<LimitChange>,
    /// Error kind, when the step failed
    pub error_kind: Option<String>,
    /// Error text, when the step failed
    pub error: Option<String>,
}

impl From<&RunReport> for RunSummary {
    fn from(report: &RunReport) -> Self {
        let failure = report.failure.as_ref();
        Self {
            mode: report.mode,
            passed: report.passed(),
            bypassed: report.bypassed,
            limits: report.limits_path.display().to_string(),
            violations: failure
                .and_then(|err| err.violations())
                .map(|v| v.iter().cloned().collect())
                .unwrap_or_default(),
            changes: report.changes.clone(),
            error_kind: failure.map(|err| err.kind().to_string()),
            error: failure.map(ToString::to_string),
        }
    }
}

impl RunSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.changes.is_empty() {
            for change in &self.changes {
                println!("{change}");
            }
            println!("{} {}", "updated".green().bold(), self.limits);
        }

        if !self.violations.is_empty() {
            println!("{}", VIOLATIONS_HEADER.red().bold());
            for violation in &self.violations {
                println!("{violation}");
            }
        } else if let Some(error) = &self.error {
            println!("{error}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a run that could not load its inputs
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Always false
    pub success: bool,
    /// Error kind, when known
    pub kind: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl ErrorReport {
    /// Create a report for a failed run
    #[must_use]
    pub fn new(kind: Option<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind,
            message: message.into(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
