//! Marker beads at segment boundaries.
//!
//! One bead sits on every curve point whose index is a multiple of the
//! chunk size, which is exactly the set of run boundary points produced by
//! [`segment`](super::segment::segment). Beads are drawn as sphere
//! impostors, so the renderer only needs one instance per bead.

use glam::Vec3;

use super::{curve::Curve, segment::run_count};

/// Default bead radius.
pub const BEAD_RADIUS: f32 = 0.12;

/// Per-instance data for one bead.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BeadInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = bead index (packed as float)
    pub color: [f32; 4],
}

impl BeadInstance {
    /// Instance buffer layout matching this struct.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<BeadInstance>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 0, // center
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 1, // color
                },
            ],
        }
    }
}

/// Boundary points of the `chunk_size` partition of `curve`: the first
/// point of every run plus the last point of the final run.
///
/// A curve too short for a single run still gets a bead on its first
/// point; an empty curve or a zero chunk size yields none.
#[must_use]
pub fn markers(curve: &Curve, chunk_size: usize) -> Vec<Vec3> {
    let points = curve.points();
    if points.is_empty() || chunk_size == 0 {
        return Vec::new();
    }
    (0..=run_count(points.len(), chunk_size))
        .map(|i| points[i * chunk_size])
        .collect()
}

/// Pack bead positions into impostor instances.
#[must_use]
pub fn bead_instances(
    markers: &[Vec3],
    radius: f32,
    rgb: [f32; 3],
) -> Vec<BeadInstance> {
    markers
        .iter()
        .enumerate()
        .map(|(i, p)| BeadInstance {
            center: [p.x, p.y, p.z, radius],
            color: [rgb[0], rgb[1], rgb[2], i as f32],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{
        curve::sample, params::HelixParameters, segment::segment, CHUNK_SIZE,
    };

    fn curve_with_points(points: u32) -> Curve {
        sample(&HelixParameters {
            length: points - 1,
            ..Default::default()
        })
    }

    #[test]
    fn one_more_bead_than_runs() {
        for points in [101, 1001, 2001, 105] {
            let curve = curve_with_points(points);
            let runs = segment(&curve, CHUNK_SIZE);
            assert_eq!(markers(&curve, CHUNK_SIZE).len(), runs.len() + 1);
        }
    }

    #[test]
    fn beads_sit_on_run_boundaries() {
        let curve = curve_with_points(1001);
        let runs = segment(&curve, CHUNK_SIZE);
        let beads = markers(&curve, CHUNK_SIZE);

        for (run, bead) in runs.iter().zip(&beads) {
            assert_eq!(run.points.first(), Some(bead));
        }
        assert_eq!(runs.last().and_then(|r| r.points.last()), beads.last());
        assert_eq!(beads[0], Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn every_tenth_point_gets_a_bead() {
        let curve = curve_with_points(101);
        let expected: Vec<Vec3> = curve
            .points()
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 10 == 0)
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(markers(&curve, CHUNK_SIZE), expected);
    }

    #[test]
    fn short_curve_still_marks_its_start() {
        let curve = curve_with_points(3);
        assert_eq!(markers(&curve, CHUNK_SIZE), vec![curve.points()[0]]);
        assert!(markers(&curve, 0).is_empty());
    }

    #[test]
    fn instances_carry_radius_and_color() {
        let beads = [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)];
        let instances = bead_instances(&beads, BEAD_RADIUS, [1.0, 0.5, 0.0]);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].center, [1.0, 2.0, 3.0, BEAD_RADIUS]);
        assert_eq!(instances[1].color, [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(
            size_of::<BeadInstance>() as u64,
            BeadInstance::buffer_layout().array_stride
        );
    }
}
