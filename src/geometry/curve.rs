//! Helix sampling.
//!
//! Pure parameters → points transform. Equal parameters always produce
//! pointwise-identical curves, which is what lets the parameter store
//! memoize everything downstream.

use std::sync::Arc;

use glam::Vec3;

use super::params::HelixParameters;

/// An ordered, immutable run of sampled helix points.
///
/// Cloning is cheap; the points are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Arc<[Vec3]>,
}

impl Curve {
    /// Sampled points in order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Length of the sampled polyline.
    #[must_use]
    pub fn arc_length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Bounding sphere as `(center, radius)`, centered on the centroid.
    #[must_use]
    pub fn bounds(&self) -> (Vec3, f32) {
        bounding_sphere(&self.points)
    }
}

/// Evaluate the helix at `length + 1` uniform steps.
///
/// One full revolution is spread over the whole sampled range while `y`
/// rises linearly from `0` to `pitch`. Zero pitch or radius yield a flat
/// circle or a vertical line; neither is an error here.
#[must_use]
pub fn sample(params: &HelixParameters) -> Curve {
    let n = params.length;
    let points: Vec<Vec3> = (0..=n)
        .map(|i| {
            let t = if n == 0 { 0.0 } else { i as f32 / n as f32 };
            let angle = std::f32::consts::TAU * t;
            Vec3::new(
                angle.cos() * params.helix_radius,
                t * params.pitch,
                angle.sin() * params.helix_radius,
            )
        })
        .collect();
    Curve {
        points: points.into(),
    }
}

/// Centroid-centered bounding sphere of a point set.
pub(crate) fn bounding_sphere(points: &[Vec3]) -> (Vec3, f32) {
    if points.is_empty() {
        return (Vec3::ZERO, 0.0);
    }
    let center = points.iter().copied().sum::<Vec3>() / points.len() as f32;
    let radius = points
        .iter()
        .map(|p| p.distance(center))
        .fold(0.0f32, f32::max);
    (center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> HelixParameters {
        HelixParameters {
            pitch: 40.0,
            length: 1000,
            helix_radius: 4.0,
            tube_radius: 0.1,
            rotation_speed: std::f32::consts::TAU,
        }
    }

    #[test]
    fn sample_count_is_length_plus_one() {
        for length in [2, 3, 100, 1000, 2000] {
            let params = HelixParameters {
                length,
                ..scenario()
            };
            assert_eq!(sample(&params).len(), length as usize + 1);
        }
    }

    #[test]
    fn scenario_endpoints() {
        let curve = sample(&scenario());
        assert_eq!(curve.len(), 1001);

        let first = curve.points()[0];
        assert_eq!(first, Vec3::new(4.0, 0.0, 0.0));

        let mid = curve.points()[500];
        assert_eq!(mid.y, 20.0);

        let last = curve.points()[1000];
        assert!((last.y - 40.0).abs() < 1e-5);
        assert!((last.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn points_lie_on_cylinder() {
        let params = scenario();
        let r2 = params.helix_radius * params.helix_radius;
        for p in sample(&params).points() {
            let d = p.x * p.x + p.z * p.z;
            assert!((d - r2).abs() < 1e-4, "off cylinder: {p:?}");
        }
    }

    #[test]
    fn sampling_is_pure() {
        let a = sample(&scenario());
        let b = sample(&scenario());
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn zero_radius_degenerates_to_vertical_line() {
        let params = HelixParameters {
            helix_radius: 0.0,
            ..scenario()
        };
        let curve = sample(&params);
        assert!(curve.points().iter().all(|p| p.x == 0.0 && p.z == 0.0));
        assert!((curve.arc_length() - 40.0).abs() < 1e-2);
    }

    #[test]
    fn zero_pitch_degenerates_to_flat_circle() {
        let params = HelixParameters {
            pitch: 0.0,
            ..scenario()
        };
        let curve = sample(&params);
        assert!(curve.points().iter().all(|p| p.y == 0.0));
        let (center, radius) = curve.bounds();
        assert!(center.length() < 1e-2);
        assert!((radius - 4.0).abs() < 1e-2);
    }
}
