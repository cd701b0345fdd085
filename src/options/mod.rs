//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, animation pacing, navigation defaults,
//! mesh detail, keybindings) are consolidated here. Options serialize
//! to/from TOML for presets stored alongside the viewer.

mod animation;
mod camera;
mod geometry;
mod keybindings;
mod navigation;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::{CameraOptions, RotationLock, ViewDirection};
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SolariumError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Frame pacing and simulated-time speed.
    pub animation: AnimationOptions,
    /// Fallback navigation address.
    pub navigation: NavigationOptions,
    /// Mesh tessellation detail.
    #[schemars(skip)]
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SolariumError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| SolariumError::OptionsParse(e.to_string()))?;
        opts.camera.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SolariumError> {
        let content =
            std::fs::read_to_string(path).map_err(SolariumError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SolariumError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SolariumError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SolariumError::Io)?;
        }
        std::fs::write(path, content).map_err(SolariumError::Io)
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

    /// Apply a single UI edit (`section.field = value`) through a JSON
    /// round trip. The options are left untouched if the edited document
    /// no longer deserializes.
    pub fn set_field(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), SolariumError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| SolariumError::OptionsParse(e.to_string()))?;
        let Some(slot) = root
            .get_mut(section)
            .and_then(serde_json::Value::as_object_mut)
        else {
            return Err(SolariumError::UnknownControl(format!(
                "{section}.{field}"
            )));
        };
        if !slot.contains_key(field) {
            return Err(SolariumError::UnknownControl(format!(
                "{section}.{field}"
            )));
        }
        let _ = slot.insert(field.to_owned(), value);

        let mut updated: Self = serde_json::from_value(root)
            .map_err(|e| SolariumError::OptionsParse(e.to_string()))?;
        updated.camera.validate()?;
        updated.keybindings.rebuild_reverse_map();
        *self = updated;
        Ok(())
    }
}
