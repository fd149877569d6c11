//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, controls, lighting, scene layout,
//! keybindings) are consolidated here. Options serialize to/from TOML;
//! every section uses `#[serde(default)]` so partial files work.

mod camera;
mod controls;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::TankyardError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[controls]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and movement parameters.
    pub camera: CameraOptions,
    /// Mouse-look tuning.
    pub controls: ControlOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Floor and tank layout.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TankyardError::Io`] if the file cannot be read, or
    /// [`TankyardError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, TankyardError> {
        let content =
            std::fs::read_to_string(path).map_err(TankyardError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| TankyardError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TankyardError::OptionsParse`] on serialization failure
    /// or [`TankyardError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TankyardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TankyardError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TankyardError::Io)?;
        }
        std::fs::write(path, content).map_err(TankyardError::Io)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
sensitivity = 8
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.controls.sensitivity, 8);
        // Everything else should be default
        assert!(opts.controls.invert_mouse);
        assert_eq!(opts.camera.move_speed, 10.0);
        assert_eq!(opts.scene.orbit_radius, 8.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::ThrustForward)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::CycleCameraMode)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_key_wins_after_rebuild() {
        let mut opts = Options::default();
        let _ = opts
            .keybindings
            .bindings
            .insert(KeyAction::ResetCamera, "KeyH".into());
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("KeyH"),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), None);
    }
}
