//! Live parameter snapshot with memoized geometry.
//!
//! The curve (and its segment partition) is keyed by the parameters that
//! shape it: pitch, sample count, and helix radius. Tube meshes are keyed
//! additionally by tube radius and the geometry options. Rotation speed
//! feeds only the animation, so changing it rebuilds nothing.
//!
//! Boundary beads depend only on the curve, so they are cached with it.
//!
//! Rebuilds are lazy: a new snapshot marks the cache stale, and the next
//! read of [`ParameterStore::segments`] pays for at most one rebuild.

use glam::Vec3;
use web_time::Instant;

use crate::{
    error::Result,
    geometry::{
        color_for, curve, markers, segment, tube, ColorId, Curve,
        HelixParameters, ParameterBounds, TubeDescriptor, CHUNK_SIZE,
    },
    options::GeometryOptions,
};

/// One drawable piece of the helix.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position along the helix, starting at 0.
    pub index: usize,
    /// The `CHUNK_SIZE + 1` curve points this tube follows.
    pub points: Vec<Vec3>,
    /// Palette identity, `PALETTE[index % PALETTE.len()]`.
    pub color: ColorId,
    /// Renderer-facing tube mesh.
    pub geometry: TubeDescriptor,
}

/// Curve and its boundary beads, plus the snapshot that produced them.
#[derive(Debug)]
struct CurveCache {
    key: HelixParameters,
    curve: Curve,
    markers: Vec<Vec3>,
}

/// Segments plus everything their meshes depend on.
#[derive(Debug)]
struct MeshCache {
    params: HelixParameters,
    geometry: GeometryOptions,
    segments: Vec<Segment>,
}

/// Rebuild counters, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildStats {
    /// Times the curve was resampled.
    pub curve_builds: u64,
    /// Times the segment set was rebuilt.
    pub segment_builds: u64,
    /// Individual tube meshes built across all rebuilds.
    pub tube_builds: u64,
}

/// Holds the current [`HelixParameters`] and the geometry derived from it.
#[derive(Debug)]
pub struct ParameterStore {
    params: HelixParameters,
    bounds: ParameterBounds,
    geometry: GeometryOptions,
    curve: Option<CurveCache>,
    meshes: Option<MeshCache>,
    stats: RebuildStats,
}

impl ParameterStore {
    /// Create a store holding `params`.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`](crate::error::HelixError) if
    /// `params` violates its invariants or lies outside `bounds`, or if
    /// `geometry` cannot be built.
    pub fn new(
        params: HelixParameters,
        bounds: ParameterBounds,
        geometry: GeometryOptions,
    ) -> Result<Self> {
        params.validate()?;
        bounds.check(&params)?;
        geometry.validate()?;
        Ok(Self {
            params,
            bounds,
            geometry,
            curve: None,
            meshes: None,
            stats: RebuildStats::default(),
        })
    }

    /// Current parameter snapshot.
    #[must_use]
    pub fn parameters(&self) -> &HelixParameters {
        &self.params
    }

    /// Ranges snapshots are checked against.
    #[must_use]
    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    /// Current tube resolution options.
    #[must_use]
    pub fn geometry_options(&self) -> &GeometryOptions {
        &self.geometry
    }

    /// Rebuild counters so far.
    #[must_use]
    pub fn stats(&self) -> RebuildStats {
        self.stats
    }

    /// Replace the snapshot. Returns whether it differs from the current
    /// one. A rejected snapshot leaves the store untouched.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`](crate::error::HelixError) if
    /// `params` violates its invariants or lies outside the bounds.
    pub fn set_parameters(&mut self, params: HelixParameters) -> Result<bool> {
        if let Err(e) = params.validate().and_then(|()| self.bounds.check(&params))
        {
            log::warn!("rejected helix parameters: {e}");
            return Err(e);
        }
        if params == self.params {
            return Ok(false);
        }
        self.params = params;
        Ok(true)
    }

    /// Replace the bounds. The current snapshot must still satisfy them.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`](crate::error::HelixError) if the
    /// current snapshot falls outside `bounds`; the old bounds are kept.
    pub fn set_bounds(&mut self, bounds: ParameterBounds) -> Result<()> {
        bounds.check(&self.params)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Replace the tube resolution options.
    ///
    /// # Errors
    ///
    /// [`HelixError::InvalidParameter`](crate::error::HelixError) if
    /// `geometry` cannot be built; the old options are kept.
    pub fn set_geometry_options(
        &mut self,
        geometry: GeometryOptions,
    ) -> Result<()> {
        if let Err(e) = geometry.validate() {
            log::warn!("rejected geometry options: {e}");
            return Err(e);
        }
        self.geometry = geometry;
        Ok(())
    }

    /// Whether the next [`Self::segments`] call will rebuild anything.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        !self.curve_is_fresh() || !self.meshes_are_fresh()
    }

    /// The sampled curve for the current snapshot, resampling if needed.
    pub fn curve(&mut self) -> &Curve {
        &self.curve_cache().curve
    }

    /// Bead positions on the segment boundaries of the current curve.
    pub fn markers(&mut self) -> &[Vec3] {
        &self.curve_cache().markers
    }

    /// Drawable segments for the current snapshot, rebuilding only what the
    /// latest changes invalidated.
    ///
    /// # Errors
    ///
    /// Propagates tube builder failures; with the fixed segmentation these
    /// indicate a broken invariant rather than bad input.
    pub fn segments(&mut self) -> Result<&[Segment]> {
        self.refresh()?;
        Ok(self.cached_segments())
    }

    /// Bring the curve, beads, and meshes up to date with the current
    /// snapshot. A failed rebuild keeps the previous meshes.
    pub(crate) fn refresh(&mut self) -> Result<()> {
        if self.meshes_are_fresh() {
            return Ok(());
        }
        let started = Instant::now();
        let settings = self.geometry.tube_settings(self.params.tube_radius);
        let curve = self.curve().clone();

        let segments = segment(&curve, CHUNK_SIZE)
            .into_iter()
            .map(|run| -> Result<Segment> {
                Ok(Segment {
                    index: run.index,
                    points: run.points.to_vec(),
                    color: color_for(run.index),
                    geometry: tube::build_with(run.points, &settings)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.stats.segment_builds += 1;
        self.stats.tube_builds += segments.len() as u64;
        log::debug!(
            "built {} tube segments in {:?}",
            segments.len(),
            started.elapsed()
        );
        self.meshes = Some(MeshCache {
            params: self.params,
            geometry: self.geometry.clone(),
            segments,
        });
        Ok(())
    }

    /// Segments from the last successful [`Self::refresh`].
    #[must_use]
    pub(crate) fn cached_segments(&self) -> &[Segment] {
        self.meshes
            .as_ref()
            .map_or(&[][..], |cache| cache.segments.as_slice())
    }

    /// Beads from the last curve sampled.
    #[must_use]
    pub(crate) fn cached_markers(&self) -> &[Vec3] {
        self.curve
            .as_ref()
            .map_or(&[][..], |cache| cache.markers.as_slice())
    }

    fn curve_cache(&mut self) -> &CurveCache {
        if !self.curve_is_fresh() {
            self.curve = None;
        }
        let params = self.params;
        let stats = &mut self.stats;
        self.curve.get_or_insert_with(|| {
            let started = Instant::now();
            let curve = curve::sample(&params);
            let markers = markers(&curve, CHUNK_SIZE);
            stats.curve_builds += 1;
            log::debug!(
                "sampled helix: {} points, {} beads in {:?}",
                curve.len(),
                markers.len(),
                started.elapsed()
            );
            CurveCache {
                key: params,
                curve,
                markers,
            }
        })
    }

    fn curve_is_fresh(&self) -> bool {
        self.curve
            .as_ref()
            .is_some_and(|cache| cache.key.same_curve(&self.params))
    }

    fn meshes_are_fresh(&self) -> bool {
        self.meshes.as_ref().is_some_and(|cache| {
            cache.params.same_curve(&self.params)
                && cache.params.tube_radius == self.params.tube_radius
                && cache.geometry == self.geometry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelixError;

    fn store() -> ParameterStore {
        ParameterStore::new(
            HelixParameters::default(),
            ParameterBounds::default(),
            GeometryOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn unchanged_parameters_reuse_meshes() {
        let mut store = store();
        let first = store.segments().unwrap().len();
        let built = store.stats();
        assert_eq!(first, 100);
        assert_eq!(built.tube_builds, 100);

        for _ in 0..5 {
            assert_eq!(store.segments().unwrap().len(), first);
        }
        assert_eq!(store.stats(), built);

        // Re-submitting the same snapshot is not a change.
        assert!(!store.set_parameters(HelixParameters::default()).unwrap());
        let _ = store.segments().unwrap();
        assert_eq!(store.stats(), built);
    }

    #[test]
    fn at_most_one_rebuild_per_snapshot() {
        let mut store = store();
        let _ = store.segments().unwrap();

        let next = HelixParameters {
            pitch: 50.0,
            ..HelixParameters::default()
        };
        assert!(store.set_parameters(next).unwrap());
        assert!(store.is_stale());
        let _ = store.segments().unwrap();
        let _ = store.segments().unwrap();

        let stats = store.stats();
        assert_eq!(stats.curve_builds, 2);
        assert_eq!(stats.segment_builds, 2);
        assert!(!store.is_stale());
    }

    #[test]
    fn rotation_speed_rebuilds_nothing() {
        let mut store = store();
        let _ = store.segments().unwrap();
        let before = store.stats();

        let faster = HelixParameters {
            rotation_speed: 1.0,
            ..HelixParameters::default()
        };
        assert!(store.set_parameters(faster).unwrap());
        assert!(!store.is_stale());
        let _ = store.segments().unwrap();
        assert_eq!(store.stats(), before);
    }

    #[test]
    fn tube_radius_remeshes_without_resampling() {
        let mut store = store();
        let _ = store.segments().unwrap();

        let thicker = HelixParameters {
            tube_radius: 0.3,
            ..HelixParameters::default()
        };
        let _ = store.set_parameters(thicker).unwrap();
        let segments = store.segments().unwrap();
        let v = segments[0].geometry.vertices()[0];
        let d = Vec3::from(v.position).distance(Vec3::from(v.center));
        assert!((d - 0.3).abs() < 1e-4);

        let stats = store.stats();
        assert_eq!(stats.curve_builds, 1);
        assert_eq!(stats.segment_builds, 2);
    }

    #[test]
    fn geometry_options_invalidate_meshes() {
        let mut store = store();
        let _ = store.segments().unwrap();
        store
            .set_geometry_options(GeometryOptions {
                cap_ends: true,
                ..GeometryOptions::default()
            })
            .unwrap();
        assert!(store.is_stale());
        let _ = store.segments().unwrap();
        assert_eq!(store.stats().curve_builds, 1);
        assert_eq!(store.stats().segment_builds, 2);
    }

    #[test]
    fn rejected_snapshot_keeps_previous_geometry() {
        let mut store = store();
        let _ = store.segments().unwrap();
        let built = store.stats();

        let bad = HelixParameters {
            helix_radius: 25.0,
            ..HelixParameters::default()
        };
        assert!(matches!(
            store.set_parameters(bad),
            Err(HelixError::InvalidParameter {
                name: "helix_radius",
                ..
            })
        ));
        assert_eq!(store.parameters(), &HelixParameters::default());
        let _ = store.segments().unwrap();
        assert_eq!(store.stats(), built);
    }

    #[test]
    fn segments_carry_cyclic_colors_and_continuity() {
        let mut store = store();
        let segments = store.segments().unwrap();
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index, i);
            assert_eq!(seg.color, color_for(i));
            assert_eq!(seg.points.len(), CHUNK_SIZE + 1);
        }
        for pair in segments.windows(2) {
            assert_eq!(pair[0].points.last(), pair[1].points.first());
        }
    }

    #[test]
    fn narrowed_bounds_must_admit_current_snapshot() {
        let mut store = store();
        let narrow = ParameterBounds {
            pitch: [1.0, 10.0],
            ..ParameterBounds::default()
        };
        assert!(store.set_bounds(narrow).is_err());
        assert_eq!(store.bounds(), &ParameterBounds::default());
    }

    #[test]
    fn curve_matches_snapshot() {
        let mut store = store();
        let curve = store.curve();
        assert_eq!(curve.len(), 1001);
        assert_eq!(curve.points()[500].y, 20.0);
    }

    #[test]
    fn unbuildable_geometry_options_are_rejected() {
        let mut store = store();
        let _ = store.segments().unwrap();
        let built = store.stats();

        let flat = GeometryOptions {
            radial_segments: 2,
            ..GeometryOptions::default()
        };
        assert!(matches!(
            store.set_geometry_options(flat.clone()),
            Err(HelixError::InvalidParameter {
                name: "radial_segments",
                ..
            })
        ));
        assert_eq!(store.geometry_options(), &GeometryOptions::default());
        assert!(!store.is_stale());
        assert_eq!(store.segments().unwrap().len(), 100);
        assert_eq!(store.stats(), built);

        assert!(ParameterStore::new(
            HelixParameters::default(),
            ParameterBounds::default(),
            flat,
        )
        .is_err());
    }

    #[test]
    fn markers_follow_the_curve_cache() {
        let mut store = store();
        assert_eq!(store.markers().len(), 101);
        let _ = store.segments().unwrap();
        assert_eq!(store.stats().curve_builds, 1);

        let thicker = HelixParameters {
            tube_radius: 0.3,
            ..HelixParameters::default()
        };
        let _ = store.set_parameters(thicker).unwrap();
        let _ = store.segments().unwrap();
        assert_eq!(store.cached_markers().len(), 101);
        assert_eq!(store.stats().curve_builds, 1);

        let taller = HelixParameters {
            pitch: 80.0,
            ..thicker
        };
        let _ = store.set_parameters(taller).unwrap();
        let _ = store.segments().unwrap();
        let last = *store.cached_markers().last().unwrap();
        assert_eq!(last.y, 80.0);
        assert_eq!(store.stats().curve_builds, 2);

        let segments = store.cached_segments();
        for (seg, bead) in segments.iter().zip(store.cached_markers()) {
            assert_eq!(seg.points.first(), Some(bead));
        }
    }
}
