//! Error types for the coverage gate

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::Violations;

/// Errors that can occur while loading, comparing or updating coverage
#[derive(Debug, Error)]
pub enum GateError {
    /// Limits file or coverage report could not be opened
    #[error("cannot read {}: {source}", .path.display())]
    NotFound {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// File contents could not be decoded, or a percentage is invalid
    #[error("malformed data in {}: {reason}", .path.display())]
    MalformedData {
        /// The file that failed to decode
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// One or more identifiers are below their configured limit
    #[error("coverage errors:\n{0}")]
    ThresholdViolation(Violations),

    /// Limits file could not be written back
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// The limits file being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Limits could not be serialized
    #[error("cannot serialize limits: {0}")]
    Serialize(String),
}

/// Coarse classification of a [`GateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing or unreadable
    NotFound,
    /// Decode failure or invalid percentage
    MalformedData,
    /// Coverage below a limit
    ThresholdViolation,
    /// Failure persisting updated limits
    Persist,
}

impl ErrorKind {
    /// Get the error kind string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::MalformedData => "malformed_data",
            Self::ThresholdViolation => "threshold_violation",
            Self::Persist => "persist",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GateError {
    /// Create a malformed data error
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MalformedData { .. } => ErrorKind::MalformedData,
            Self::ThresholdViolation(_) => ErrorKind::ThresholdViolation,
            Self::Write { .. } | Self::Serialize(_) => ErrorKind::Persist,
        }
    }

    /// Violations carried by this error, if it is a threshold violation
    #[must_use]
    pub const fn violations(&self) -> Option<&Violations> {
        match self {
            Self::ThresholdViolation(violations) => Some(violations),
            _ => None,
        }
    }
}
