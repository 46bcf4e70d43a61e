//! Spline interpolation and frame computation for tube sweeps.
//!
//! Pure Vec3 → Vec3 transforms with no renderer dependencies.

use glam::Vec3;

/// A point along the spline with position, tangent, and frame vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplinePoint {
    pub pos: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Interpolate a smooth path through `controls` with cubic Hermite spans
/// (Catmull-Rom tangents) and attach rotation-minimizing frames.
///
/// Every control point is passed through; `segments_per_span` samples are
/// emitted between consecutive controls, plus the final control.
pub(crate) fn interpolate(
    controls: &[Vec3],
    segments_per_span: usize,
) -> Vec<SplinePoint> {
    let n = controls.len();
    if n < 2 {
        return Vec::new();
    }
    let spans = segments_per_span.max(1);

    let tangents: Vec<Vec3> = (0..n)
        .map(|i| {
            if i == 0 {
                controls[1] - controls[0]
            } else if i == n - 1 {
                controls[n - 1] - controls[n - 2]
            } else {
                (controls[i + 1] - controls[i - 1]) * 0.5
            }
        })
        .collect();

    let mut points = Vec::with_capacity((n - 1) * spans + 1);
    for i in 0..n - 1 {
        let p0 = controls[i];
        let p1 = controls[i + 1];
        let m0 = tangents[i];
        let m1 = tangents[i + 1];

        for j in 0..spans {
            let t = j as f32 / spans as f32;
            points.push(SplinePoint {
                pos: hermite_point(p0, m0, p1, m1, t),
                tangent: safe_direction(hermite_tangent(p0, m0, p1, m1, t)),
                normal: Vec3::ZERO,
                binormal: Vec3::ZERO,
            });
        }
    }

    points.push(SplinePoint {
        pos: controls[n - 1],
        tangent: safe_direction(tangents[n - 1]),
        normal: Vec3::ZERO,
        binormal: Vec3::ZERO,
    });

    compute_rmf(&mut points);
    points
}

/// Normalize, falling back to +Y for coincident controls.
fn safe_direction(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(Vec3::Y)
}

/// Cubic Hermite interpolation for position.
fn hermite_point(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}

/// Derivative of [`hermite_point`] with respect to `t`.
fn hermite_tangent(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    let dh00 = 6.0 * t2 - 6.0 * t;
    let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
    let dh01 = -6.0 * t2 + 6.0 * t;
    let dh11 = 3.0 * t2 - 2.0 * t;

    p0 * dh00 + m0 * dh10 + p1 * dh01 + m1 * dh11
}

/// Compute Rotation Minimizing Frames using the double reflection method
/// (Wang et al. 2008).
pub(crate) fn compute_rmf(points: &mut [SplinePoint]) {
    let Some(first) = points.first_mut() else {
        return;
    };

    let t0 = first.tangent;
    let arbitrary = if t0.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let n0 = t0.cross(arbitrary).normalize();
    first.normal = n0;
    first.binormal = t0.cross(n0).normalize();

    for i in 0..points.len() - 1 {
        let cur = points[i];
        let t_i1 = points[i + 1].tangent;

        let v1 = points[i + 1].pos - cur.pos;
        let c1 = v1.dot(v1);

        if c1 < 1e-10 {
            points[i + 1].normal = cur.normal;
            points[i + 1].binormal = cur.binormal;
            continue;
        }

        // First reflection
        let r_l = cur.normal - (2.0 / c1) * v1.dot(cur.normal) * v1;
        let t_l = cur.tangent - (2.0 / c1) * v1.dot(cur.tangent) * v1;

        // Second reflection
        let v2 = t_i1 - t_l;
        let c2 = v2.dot(v2);
        let r_i1 = if c2 < 1e-10 {
            r_l
        } else {
            r_l - (2.0 / c2) * v2.dot(r_l) * v2
        };

        // Re-orthonormalize against the new tangent
        let r_i1 = (r_i1 - t_i1 * t_i1.dot(r_i1))
            .try_normalize()
            .unwrap_or(cur.normal);
        points[i + 1].normal = r_i1;
        points[i + 1].binormal = t_i1.cross(r_i1).normalize();
    }
}
