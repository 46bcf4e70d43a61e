use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{HelixError, Result},
    geometry::{tube, TubeSettings, BEAD_RADIUS},
};

/// Upper bound on axial spline samples between control points.
const MAX_SEGMENTS_PER_SPAN: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Tube mesh resolution and boundary bead options.
pub struct GeometryOptions {
    /// Number of radial segments around tubes.
    #[schemars(skip)]
    pub radial_segments: u32,
    /// Axial spline samples between consecutive curve points.
    #[schemars(title = "Smoothness", range(min = 1, max = 8), extend("step" = 1))]
    pub segments_per_span: u32,
    /// Close the ends of every tube segment.
    #[schemars(title = "Cap Ends")]
    pub cap_ends: bool,
    /// Draw a bead on every segment boundary.
    #[schemars(title = "Show Beads")]
    pub show_beads: bool,
    /// Bead radius.
    #[schemars(title = "Bead Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub bead_radius: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            radial_segments: tube::RADIAL_SEGMENTS,
            segments_per_span: tube::SEGMENTS_PER_SPAN,
            cap_ends: false,
            show_beads: true,
            bead_radius: BEAD_RADIUS,
        }
    }
}

impl GeometryOptions {
    /// Tube settings for a sweep of `radius` at this resolution.
    #[must_use]
    pub fn tube_settings(&self, radius: f32) -> TubeSettings {
        TubeSettings {
            radius,
            radial_segments: self.radial_segments,
            segments_per_span: self.segments_per_span,
            cap_ends: self.cap_ends,
        }
    }

    /// Check that tubes and beads can be built at this resolution.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`] if `radial_segments < 3`,
    /// `segments_per_span` is outside `[1, 8]`, or `bead_radius` is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.radial_segments < 3 {
            return Err(HelixError::invalid(
                "radial_segments",
                self.radial_segments,
                "must be at least 3",
            ));
        }
        if !(1..=MAX_SEGMENTS_PER_SPAN).contains(&self.segments_per_span) {
            return Err(HelixError::invalid(
                "segments_per_span",
                self.segments_per_span,
                format!("outside [1, {MAX_SEGMENTS_PER_SPAN}]"),
            ));
        }
        if !(self.bead_radius.is_finite() && self.bead_radius > 0.0) {
            return Err(HelixError::invalid(
                "bead_radius",
                self.bead_radius,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_is_valid() {
        assert!(GeometryOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_unbuildable_resolution() {
        let flat = GeometryOptions {
            radial_segments: 2,
            ..GeometryOptions::default()
        };
        assert!(matches!(
            flat.validate(),
            Err(HelixError::InvalidParameter {
                name: "radial_segments",
                ..
            })
        ));

        for segments_per_span in [0, MAX_SEGMENTS_PER_SPAN + 1] {
            let opts = GeometryOptions {
                segments_per_span,
                ..GeometryOptions::default()
            };
            assert!(matches!(
                opts.validate(),
                Err(HelixError::InvalidParameter {
                    name: "segments_per_span",
                    ..
                })
            ));
        }

        let no_bead = GeometryOptions {
            bead_radius: 0.0,
            ..GeometryOptions::default()
        };
        assert!(no_bead.validate().is_err());
    }
}
