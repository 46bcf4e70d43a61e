use serde::{Deserialize, Serialize};

use crate::geometry::ColorId;

/// RGB values the renderer uses for each segment color identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB for [`ColorId::Orange`].
    pub orange: [f32; 3],
    /// RGB for [`ColorId::DarkOrange`].
    pub dark_orange: [f32; 3],
    /// RGB for [`ColorId::Gold`].
    pub gold: [f32; 3],
    /// RGB for [`ColorId::Coral`].
    pub coral: [f32; 3],
    /// RGB for [`ColorId::Crimson`].
    pub crimson: [f32; 3],
    /// RGB for the segment boundary beads.
    pub bead: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            orange: [1.0, 0.647, 0.0],
            dark_orange: [1.0, 0.549, 0.0],
            gold: [1.0, 0.843, 0.0],
            coral: [1.0, 0.498, 0.314],
            crimson: [0.863, 0.078, 0.235],
            bead: [1.0, 0.549, 0.0],
        }
    }
}

impl ColorOptions {
    /// Resolve a color identity to RGB.
    #[must_use]
    pub fn rgb(&self, id: ColorId) -> [f32; 3] {
        match id {
            ColorId::Orange => self.orange,
            ColorId::DarkOrange => self.dark_orange,
            ColorId::Gold => self.gold,
            ColorId::Coral => self.coral,
            ColorId::Crimson => self.crimson,
        }
    }
}
