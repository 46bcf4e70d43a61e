//! Camera system for viewing the helix.
//!
//! Provides a perspective camera and the orbit that moves it around the
//! origin every frame.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Orbiting camera driven by elapsed time.
pub mod orbit;

pub use orbit::{CameraFrame, CameraOrbit};
