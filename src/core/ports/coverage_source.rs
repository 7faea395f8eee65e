//! Coverage source port

use std::path::Path;

use crate::core::models::CoverageMap;
use crate::error::GateError;

/// Source of observed coverage, derived fresh every run
pub trait CoverageSource {
    /// Where the report lives (used in messages)
    fn location(&self) -> &Path;

    /// Read the observed coverage mapping
    fn load(&self) -> Result<CoverageMap, GateError>;
}
