//! Helix parameter snapshots and the bounds they are checked against.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{HelixError, Result};

/// Live geometry parameters for the helix.
///
/// A snapshot is immutable once handed to the
/// [`ParameterStore`](crate::scene::store::ParameterStore); edits produce a
/// new value rather than mutating the stored one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
pub struct HelixParameters {
    /// Vertical rise over the full sampled range.
    #[schemars(title = "Pitch", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Number of sampling steps; the curve holds `length + 1` points.
    #[schemars(title = "Samples", range(min = 100, max = 2000), extend("step" = 10))]
    pub length: u32,
    /// Radius of the cylinder the helix winds around.
    #[schemars(title = "Helix Radius", range(min = 1.0, max = 10.0), extend("step" = 0.1))]
    pub helix_radius: f32,
    /// Radius of the swept tube cross-section.
    #[schemars(title = "Tube Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub tube_radius: f32,
    /// Self-rotation speed in radians per second.
    #[schemars(title = "Rotation Speed", range(min = 0.0, max = 12.566_371), extend("step" = 0.1))]
    pub rotation_speed: f32,
}

impl Default for HelixParameters {
    fn default() -> Self {
        Self {
            pitch: 40.0,
            length: 1000,
            helix_radius: 4.0,
            tube_radius: 0.1,
            rotation_speed: std::f32::consts::TAU,
        }
    }
}

impl HelixParameters {
    /// Check the domain invariants every snapshot must satisfy: all fields
    /// finite, `length >= 2`, both radii strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::InvalidParameter`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("pitch", self.pitch),
            ("helix_radius", self.helix_radius),
            ("tube_radius", self.tube_radius),
            ("rotation_speed", self.rotation_speed),
        ] {
            if !value.is_finite() {
                return Err(HelixError::invalid(name, value, "must be finite"));
            }
        }
        if self.length < 2 {
            return Err(HelixError::invalid(
                "length",
                self.length,
                "must be at least 2",
            ));
        }
        if self.helix_radius <= 0.0 {
            return Err(HelixError::invalid(
                "helix_radius",
                self.helix_radius,
                "must be positive",
            ));
        }
        if self.tube_radius <= 0.0 {
            return Err(HelixError::invalid(
                "tube_radius",
                self.tube_radius,
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Whether `other` would produce the same curve (and segment partition).
    #[must_use]
    pub fn same_curve(&self, other: &Self) -> bool {
        self.pitch == other.pitch
            && self.length == other.length
            && self.helix_radius == other.helix_radius
    }
}

/// Inclusive `[min, max]` ranges the UI layer clamps parameters to.
///
/// The core never clamps; a snapshot outside these ranges is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParameterBounds {
    /// Pitch range.
    pub pitch: [f32; 2],
    /// Sample count range.
    pub length: [u32; 2],
    /// Helix radius range.
    pub helix_radius: [f32; 2],
    /// Tube radius range.
    pub tube_radius: [f32; 2],
    /// Rotation speed range (radians per second).
    pub rotation_speed: [f32; 2],
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            pitch: [1.0, 100.0],
            length: [100, 2000],
            helix_radius: [1.0, 10.0],
            tube_radius: [0.01, 0.5],
            rotation_speed: [0.0, 2.0 * std::f32::consts::TAU],
        }
    }
}

impl ParameterBounds {
    /// Check `params` against every range.
    ///
    /// # Errors
    ///
    /// Returns [`HelixError::InvalidParameter`] for the first field outside
    /// its range.
    pub fn check(&self, params: &HelixParameters) -> Result<()> {
        for (name, value, [min, max]) in [
            ("pitch", params.pitch, self.pitch),
            ("helix_radius", params.helix_radius, self.helix_radius),
            ("tube_radius", params.tube_radius, self.tube_radius),
            ("rotation_speed", params.rotation_speed, self.rotation_speed),
        ] {
            if !(min..=max).contains(&value) {
                return Err(HelixError::invalid(
                    name,
                    value,
                    format!("outside [{min}, {max}]"),
                ));
            }
        }
        let [min, max] = self.length;
        if !(min..=max).contains(&params.length) {
            return Err(HelixError::invalid(
                "length",
                params.length,
                format!("outside [{min}, {max}]"),
            ));
        }
        Ok(())
    }
}
