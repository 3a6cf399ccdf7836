//! Tool configuration from `toolforge.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── image      # [image]
//! │   ├── json       # [json]
//! │   ├── text       # [text]
//! │   └── uuid       # [uuid]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ToolConfig (this file)
//! ```
//!
//! The file is optional: without one every section uses its defaults.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ImageConfig, JsonConfig, TextConfig, UuidConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "toolforge.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing toolforge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Absolute path to the loaded config file (empty when using defaults)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Text statistics settings
    #[serde(default)]
    pub text: TextConfig,

    /// JSON formatting settings
    #[serde(default)]
    pub json: JsonConfig,

    /// Image pipeline settings
    #[serde(default)]
    pub image: ImageConfig,

    /// UUID generation settings
    #[serde(default)]
    pub uuid: UuidConfig,
}

impl ToolConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(config_name) else {
            debug!("config"; "{} not found, using defaults", config_name.display());
            return Ok(Self::default());
        };

        debug!("config"; "loading {}", path.display());
        let mut config = Self::from_path(&path)?;
        config.config_path = path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
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
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.text.validate(&mut diag);
        self.json.validate(&mut diag);
        self.image.validate(&mut diag);
        self.uuid.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config text.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ToolConfig {
    let (parsed, ignored) = ToolConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
