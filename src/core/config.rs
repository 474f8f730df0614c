//! Export configuration
//!
//! Everything the host can tune about an export run lives here. All fields
//! have defaults, so an empty TOML file (or no file at all) yields a usable
//! configuration.

use std::path::{Path, PathBuf};

use ahash::AHashSet;
use serde::Deserialize;

use crate::core::error::{ExportError, Result};
use crate::localization::LocaleTable;

/// Default sink name, relative to the host's working directory
pub const DEFAULT_OUTPUT_FILE: &str = "exported_data.json";

/// Substring of a talent group category that marks a lavish workspace group
pub const DEFAULT_LAVISH_MARKER: &str = "LavishWorkspace";

/// Configuration for a snapshot export
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the JSON document is written. Any previous file is replaced.
    pub output_path: PathBuf,

    /// Indent the document for readability
    ///
    /// The consuming site does not care; this is for humans diffing snapshots.
    pub pretty: bool,

    /// Marker searched for in talent group category names when looking for
    /// a skill's lavish workspace bonus
    pub lavish_marker: String,

    /// Supported locale table, in priority order
    ///
    /// When several locales share a culture, the first one listed wins.
    pub locales: LocaleTable,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pretty: true,
            lavish_marker: DEFAULT_LAVISH_MARKER.to_string(),
            locales: LocaleTable::default(),
        }
    }
}

impl ExportConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: ExportConfig = toml::from_str(content)?;
        config.validate().map_err(ExportError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.lavish_marker.trim().is_empty() {
            return Err("lavish_marker must not be empty".into());
        }

        if self.locales.is_empty() {
            return Err("locale table must contain at least one entry".into());
        }

        let mut seen = AHashSet::new();
        for entry in self.locales.iter() {
            if entry.locale.trim().is_empty() || entry.culture.trim().is_empty() {
                return Err(format!(
                    "locale entry '{}' -> '{}' has a blank code",
                    entry.locale, entry.culture
                ));
            }
            if !seen.insert(entry.locale.as_str()) {
                return Err(format!("locale '{}' is listed more than once", entry.locale));
            }
        }

        Ok(())
    }
}
