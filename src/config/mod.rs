//! Sorter configuration.
//!
//! One TOML file (`priosort.toml`) with a single `[weights]` section holds
//! the process-wide cause weight settings. A missing file is not an error —
//! everything defaults to 0 until an administrator opts in.

mod error;
mod handle;

pub use error::ConfigError;
pub use handle::WeightsHandle;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::log;
use crate::queue::CauseWeights;

/// Default config filename
pub const CONFIG_FILE: &str = "priosort.toml";

/// Persisted sorter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    /// Per-cause priority adjustments.
    pub weights: CauseWeights,
}

impl SorterConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Load configuration, treating a missing file as all defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write configuration back to disk.
    ///
    /// Re-serializes the whole document, so comments in a hand-edited file
    /// do not survive.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|err| ConfigError::Write(path.to_path_buf(), err))?;
        Ok(())
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    ///
    /// Warn-and-continue: a sorter invoked from a scheduler must not block
    /// on stdin, so unknown keys never abort the load.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}
