use glam::Vec3;

use super::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Camera state for one frame, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// The positioned camera.
    pub camera: Camera,
    /// GPU-ready uniform derived from [`Self::camera`].
    pub uniform: CameraUniform,
}

/// Camera circling the vertical axis at a fixed radius, always looking at
/// the origin.
///
/// Independent of the helix animation mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOrbit {
    options: CameraOptions,
}

impl CameraOrbit {
    /// Orbit with the given radius, rate, and projection settings.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        Self { options }
    }

    /// Eye position at `elapsed` seconds:
    /// `(sin(elapsed·rate)·R, 0, cos(elapsed·rate)·R)`.
    #[must_use]
    pub fn eye(&self, elapsed: f32) -> Vec3 {
        let phase = elapsed * self.options.orbit_rate;
        let r = self.options.orbit_radius;
        Vec3::new(phase.sin() * r, 0.0, phase.cos() * r)
    }

    /// Camera and uniform for the frame at `elapsed`.
    #[must_use]
    pub fn frame(&self, elapsed: f32, aspect: f32) -> CameraFrame {
        let camera = Camera {
            eye: self.eye(elapsed),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: self.options.fovy,
            znear: self.options.znear,
            zfar: self.options.zfar,
        };
        CameraFrame {
            camera,
            uniform: camera.uniform(),
        }
    }
}
