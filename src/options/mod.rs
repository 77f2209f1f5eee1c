//! Rig and input options with TOML preset support.
//!
//! Options serialize to/from TOML so a host can keep camera presets on disk
//! (for example a `presets/` directory with one file per game mode).

mod input;
mod rig;

use std::path::Path;

pub use input::InputSettingsOptions;
pub use rig::RigOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbicamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rig behavior and limits.
    pub rig: RigOptions,
    /// Shared pointer settings.
    pub input: InputSettingsOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, OrbicamError> {
        let content = std::fs::read_to_string(path).map_err(OrbicamError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails when `content` is not valid TOML for these options.
    pub fn from_toml(content: &str) -> Result<Self, OrbicamError> {
        toml::from_str(content)
            .map_err(|e| OrbicamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails on serialization or file-system errors.
    pub fn save(&self, path: &Path) -> Result<(), OrbicamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbicamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbicamError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbicamError::Io)
    }

    /// Names of the rig presets in `dir`, sorted.
    ///
    /// A preset is a `.toml` file that parses as [`Options`]; other files,
    /// and TOML that does not describe a rig, are skipped with a warning.
    /// A missing directory has no presets.
    ///
    /// # Errors
    ///
    /// Fails when `dir` exists but cannot be read.
    pub fn list_presets(dir: &Path) -> Result<Vec<String>, OrbicamError> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(OrbicamError::Io(e)),
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?.to_owned();
                match Self::load(&path) {
                    Ok(_) => Some(stem),
                    Err(e) => {
                        log::warn!("skipping preset '{stem}': {e}");
                        None
                    }
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
