use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbiting camera parameters.
pub struct CameraOptions {
    /// Distance of the eye from the orbit axis.
    #[schemars(title = "Orbit Radius", range(min = 2.0, max = 50.0), extend("step" = 0.5))]
    pub orbit_radius: f32,
    /// Orbit angular rate in radians per second of elapsed time.
    #[schemars(title = "Orbit Rate", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub orbit_rate: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            orbit_radius: 8.0,
            orbit_rate: 2.0,
            fovy: 30.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
