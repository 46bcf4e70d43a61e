//! Per-frame animation of the whole helix assembly.
//!
//! Animation state is a plain value threaded through [`advance`]; nothing
//! here touches geometry, and geometry rebuilds never reset it.

use glam::{Mat4, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which transform the helix animates each frame.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Continuous self-rotation about the vertical axis.
    #[default]
    Rotate,
    /// Continuous downward drift of one unit per second.
    Fall,
    /// Hold the current transform.
    Paused,
}

/// Transform state of the helix assembly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Rotation about +Y in radians.
    pub rotation_angle: f32,
    /// Translation along Y.
    pub vertical_offset: f32,
}

impl AnimationState {
    /// Model matrix the renderer applies to every segment: rotate about Y,
    /// then drop by the vertical offset.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.rotation_angle),
            Vec3::new(0.0, self.vertical_offset, 0.0),
        )
    }
}

/// Advance `state` by one frame.
///
/// `elapsed` is accepted for symmetry with the frame clock; neither mode
/// depends on absolute time, so a mode switch continues from the current
/// values without a jump.
#[must_use]
pub fn advance(
    state: AnimationState,
    mode: AnimationMode,
    _elapsed: f32,
    delta: f32,
    rotation_speed: f32,
) -> AnimationState {
    match mode {
        AnimationMode::Rotate => AnimationState {
            rotation_angle: state.rotation_angle + delta * rotation_speed,
            ..state
        },
        AnimationMode::Fall => AnimationState {
            vertical_offset: state.vertical_offset - delta,
            ..state
        },
        AnimationMode::Paused => state,
    }
}

/// Holds the configured mode and the live [`AnimationState`].
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    mode: AnimationMode,
    state: AnimationState,
}

impl AnimationController {
    /// Start from the identity transform in `mode`.
    #[must_use]
    pub fn new(mode: AnimationMode) -> Self {
        Self {
            mode,
            state: AnimationState::default(),
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Switch modes, keeping the accumulated state.
    pub fn set_mode(&mut self, mode: AnimationMode) {
        self.mode = mode;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Advance one frame and return the new state.
    pub fn tick(
        &mut self,
        elapsed: f32,
        delta: f32,
        rotation_speed: f32,
    ) -> AnimationState {
        self.state =
            advance(self.state, self.mode, elapsed, delta, rotation_speed);
        self.state
    }
}
