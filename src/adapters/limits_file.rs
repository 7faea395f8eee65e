//! File-backed limits store
//!
//! Limits live in a flat JSON object (`limits.json` by default) or, when the
//! path ends in `.toml`, a flat TOML table. Writes replace the whole file
//! with a pretty-printed rendering so diffs stay reviewable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::models::CoverageMap;
use crate::core::ports::LimitsStore;
use crate::error::GateError;

/// Indentation used when writing JSON limits
const JSON_INDENT: &[u8] = b"\t";

/// Serialization format of a limits file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitsFormat {
    /// `{ "<id>": <float>, ... }`
    #[default]
    Json,
    /// `"<id>" = <float>` per line
    Toml,
}

impl LimitsFormat {
    /// Pick the format from a file extension (`.toml` or JSON otherwise)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Decode limits from file contents
    fn decode(self, content: &str) -> Result<CoverageMap, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Encode limits as pretty-printed file contents
    fn encode(self, limits: &CoverageMap) -> Result<String, String> {
        match self {
            Self::Json => {
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                limits.serialize(&mut ser).map_err(|e| e.to_string())?;
                buf.push(b'\n');
                String::from_utf8(buf).map_err(|e| e.to_string())
            },
            Self::Toml => toml::to_string_pretty(limits).map_err(|e| e.to_string()),
        }
    }
}

/// Limits stored in a single file
#[derive(Debug, Clone)]
pub struct LimitsFile {
    path: PathBuf,
    format: LimitsFormat,
}

impl LimitsFile {
    /// Create a store for `path`, choosing the format from its extension
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = LimitsFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a store with an explicit format
    #[must_use]
    pub fn with_format(path: impl Into<PathBuf>, format: LimitsFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// The format used for this file
    #[must_use]
    pub const fn format(&self) -> LimitsFormat {
        self.format
    }
}

impl LimitsStore for LimitsFile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CoverageMap, GateError> {
        let content = fs::read_to_string(&self.path).map_err(|source| GateError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        let limits =
            self.format.decode(&content).map_err(|reason| GateError::malformed(&self.path, reason))?;

        if let Some((id, value)) = limits.first_out_of_range() {
            return Err(GateError::malformed(
                &self.path,
                format!("limit for {id} is {value}, expected a percentage between 0 and 100"),
            ));
        }

        log::debug!("loaded {} limit(s) from {}", limits.len(), self.path.display());
        Ok(limits)
    }

    fn save(&self, limits: &CoverageMap) -> Result<(), GateError> {
        let content = self.format.encode(limits).map_err(GateError::Serialize)?;
        fs::write(&self.path, content).map_err(|source| GateError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
