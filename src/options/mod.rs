//! Centralized controller options with TOML preset support.
//!
//! All tweakable settings (orbit limits and speeds, first-person physics,
//! keybindings, frame stepping) are consolidated here. Options serialize
//! to/from TOML so hosts can ship control presets.

mod first_person;
mod frame;
mod keybindings;
mod orbit;

use std::path::Path;

pub use first_person::FirstPersonOptions;
pub use frame::FrameOptions;
pub use keybindings::KeybindingOptions;
pub use orbit::{MouseButtonMap, OrbitOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PivotError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit controller parameters.
    pub orbit: OrbitOptions,
    /// First-person controller parameters.
    pub first_person: FirstPersonOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Frame stepping parameters.
    pub frame: FrameOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema as a pretty-printed string, for UI generators.
    pub fn json_schema_string() -> Result<String, PivotError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| PivotError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PivotError> {
        let content = std::fs::read_to_string(path).map_err(PivotError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PivotError> {
        toml::from_str(content)
            .map_err(|e| PivotError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PivotError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PivotError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PivotError::Io)?;
        }
        std::fs::write(path, content).map_err(PivotError::Io)?;
        log::debug!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
