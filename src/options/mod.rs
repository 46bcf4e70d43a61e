//! Centralized scene options with TOML preset support.
//!
//! Initial helix parameters and their UI bounds, tube resolution, segment
//! colors, animation mode, and camera orbit are consolidated here. Options
//! serialize to/from TOML so a UI layer can store named presets.

mod animation;
mod camera;
mod colors;
mod geometry;
mod helix;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use geometry::GeometryOptions;
pub use helix::HelixOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::HelixError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial helix parameters and their bounds.
    pub helix: HelixOptions,
    /// Tube mesh resolution.
    pub geometry: GeometryOptions,
    /// Segment palette RGB values.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Animation mode.
    pub animation: AnimationOptions,
    /// Camera orbit and projection.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, HelixError> {
        toml::from_str(content)
            .map_err(|e| HelixError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::Io`] if the file cannot be read and
    /// [`HelixError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, HelixError> {
        let content = std::fs::read_to_string(path).map_err(HelixError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::OptionsParse`] if serialization fails and
    /// [`HelixError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), HelixError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HelixError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HelixError::Io)?;
        }
        std::fs::write(path, content).map_err(HelixError::Io)
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
    use crate::{animation::AnimationMode, geometry::ColorId};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[helix.initial]
pitch = 60.0

[animation]
mode = "fall"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.helix.initial.pitch, 60.0);
        assert_eq!(opts.helix.initial.length, 1000);
        assert_eq!(opts.animation.mode, AnimationMode::Fall);
        assert_eq!(opts.camera.orbit_radius, 8.0);
        assert_eq!(opts.geometry.radial_segments, 8);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera\norbit_radius = ").unwrap_err();
        assert!(matches!(err, HelixError::OptionsParse(_)));
    }

    #[test]
    fn palette_lookup() {
        let colors = ColorOptions::default();
        assert_eq!(colors.rgb(ColorId::Orange), [1.0, 0.647, 0.0]);
        assert_ne!(colors.rgb(ColorId::Gold), colors.rgb(ColorId::Crimson));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("helixtube-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.orbit_radius = 12.0;
        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "wide"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/helix.toml"))
            .unwrap_err();
        assert!(matches!(err, HelixError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("helix"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));

        let helix = &props["helix"]["properties"];
        assert!(helix.get("initial").is_some());
        assert!(helix.get("bounds").is_none());

        let camera = &props["camera"]["properties"];
        assert!(camera.get("orbit_radius").is_some());
        assert!(camera.get("znear").is_none());
    }
}
