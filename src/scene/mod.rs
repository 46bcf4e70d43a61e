//! Frame-loop facade over the geometry pipeline.
//!
//! [`HelixScene`] owns the [`store::ParameterStore`], the animation
//! controller, and the camera orbit. Each call to [`HelixScene::frame`]
//! advances animation and camera unconditionally and hands back the cached
//! segments, rebuilding them only on the frame a parameter change is first
//! observed.
//!
//! Everything runs on the caller's thread; parameter updates made between
//! frames are visible to the next `frame` call.

pub mod store;

use glam::{Mat4, Vec3};
pub use store::{ParameterStore, RebuildStats, Segment};

use crate::{
    animation::{AnimationController, AnimationMode, AnimationState},
    camera::{CameraFrame, CameraOrbit},
    error::{HelixError, Result},
    geometry::{bead_instances, BeadInstance, HelixParameters},
    options::{ColorOptions, Options},
    util::FrameTick,
};

/// Everything the external renderer needs for one frame.
#[derive(Debug)]
pub struct FrameOutput<'a> {
    /// Segments to draw, each with its tube mesh and color identity.
    pub segments: &'a [Segment],
    /// Bead positions on the segment boundaries.
    pub markers: &'a [Vec3],
    /// Bead radius, or `None` when beads are hidden.
    pub bead_radius: Option<f32>,
    /// RGB values for the segments' color identities.
    pub colors: &'a ColorOptions,
    /// Animation state after this frame's advance.
    pub animation: AnimationState,
    /// Model matrix applied to every segment.
    pub transform: Mat4,
    /// Camera for this frame.
    pub camera: CameraFrame,
}

impl FrameOutput<'_> {
    /// Bead impostor instances for this frame, empty when beads are hidden.
    #[must_use]
    pub fn bead_instances(&self) -> Vec<BeadInstance> {
        self.bead_radius.map_or_else(Vec::new, |radius| {
            bead_instances(self.markers, radius, self.colors.bead)
        })
    }
}

/// Animated, parameterized helix scene.
#[derive(Debug)]
pub struct HelixScene {
    store: ParameterStore,
    animation: AnimationController,
    orbit: CameraOrbit,
    colors: ColorOptions,
    aspect: f32,
    last_elapsed: Option<f32>,
}

impl HelixScene {
    /// Build a scene from options, starting at `options.helix.initial`.
    ///
    /// Geometry is not built until the first [`Self::frame`].
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`] if the initial parameters are
    /// invalid or outside the configured bounds.
    pub fn new(options: &Options) -> Result<Self> {
        let store = ParameterStore::new(
            options.helix.initial,
            options.helix.bounds.clone(),
            options.geometry.clone(),
        )?;
        log::info!(
            "helix scene: {} samples, {:?} animation",
            options.helix.initial.length,
            options.animation.mode
        );
        Ok(Self {
            store,
            animation: AnimationController::new(options.animation.mode),
            orbit: CameraOrbit::new(options.camera.clone()),
            colors: options.colors.clone(),
            aspect: 1.0,
            last_elapsed: None,
        })
    }

    /// Current parameter snapshot.
    #[must_use]
    pub fn parameters(&self) -> &HelixParameters {
        self.store.parameters()
    }

    /// Submit a new parameter snapshot from the UI layer. Returns whether it
    /// differs from the current one.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`] for an invalid or out-of-bounds
    /// snapshot; the previous snapshot stays in effect.
    pub fn set_parameters(&mut self, params: HelixParameters) -> Result<bool> {
        self.store.set_parameters(params)
    }

    /// Re-apply options at runtime. Animation state is kept.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`] if the geometry options cannot be
    /// built or the current snapshot falls outside the new bounds; nothing
    /// is applied in that case.
    pub fn apply_options(&mut self, options: &Options) -> Result<()> {
        options.geometry.validate()?;
        self.store.set_bounds(options.helix.bounds.clone())?;
        self.store.set_geometry_options(options.geometry.clone())?;
        self.animation.set_mode(options.animation.mode);
        self.orbit = CameraOrbit::new(options.camera.clone());
        self.colors = options.colors.clone();
        Ok(())
    }

    /// Switch animation mode without resetting accumulated state.
    pub fn set_animation_mode(&mut self, mode: AnimationMode) {
        self.animation.set_mode(mode);
    }

    /// Current animation state.
    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Viewport aspect ratio used for the camera projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// The underlying parameter store.
    #[must_use]
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Advance one frame.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`] if `tick.delta` is negative or
    /// non-finite, or `tick.elapsed` went backwards; the scene is left
    /// unchanged. Tube builder failures are propagated, also without
    /// advancing animation or the clock.
    pub fn frame(&mut self, tick: FrameTick) -> Result<FrameOutput<'_>> {
        if !(tick.delta.is_finite() && tick.delta >= 0.0) {
            return Err(HelixError::invalid(
                "delta",
                tick.delta,
                "must be finite and non-negative",
            ));
        }
        if !tick.elapsed.is_finite()
            || self.last_elapsed.is_some_and(|last| tick.elapsed < last)
        {
            return Err(HelixError::invalid(
                "elapsed",
                tick.elapsed,
                "must be finite and monotonically increasing",
            ));
        }
        self.store.refresh()?;
        self.last_elapsed = Some(tick.elapsed);

        let animation = self.animation.tick(
            tick.elapsed,
            tick.delta,
            self.store.parameters().rotation_speed,
        );
        let camera = self.orbit.frame(tick.elapsed, self.aspect);
        let geometry = self.store.geometry_options();

        Ok(FrameOutput {
            segments: self.store.cached_segments(),
            markers: self.store.cached_markers(),
            bead_radius: geometry.show_beads.then_some(geometry.bead_radius),
            colors: &self.colors,
            animation,
            transform: animation.transform(),
            camera,
        })
    }
}
