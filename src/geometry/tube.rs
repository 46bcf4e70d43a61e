//! Tube mesh builder.
//!
//! Sweeps a circular cross-section along a Hermite spline through a point
//! run, using rotation-minimizing frames for consistent tube orientation.

use glam::Vec3;

use super::{
    curve::bounding_sphere,
    spline::{self, SplinePoint},
};
use crate::error::{HelixError, Result};

/// Radial segments around the tube circumference.
pub const RADIAL_SEGMENTS: u32 = 8;

/// Default axial samples between consecutive control points.
pub const SEGMENTS_PER_SPAN: u32 = 4;

/// Vertex for the tube mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TubeVertex {
    /// Surface position.
    pub position: [f32; 3],
    /// Outward surface normal.
    pub normal: [f32; 3],
    /// Tube centerline position — enables per-pixel cylindrical normals in
    /// the fragment stage.
    pub center: [f32; 3],
}

impl TubeVertex {
    /// Vertex buffer layout matching this struct, for the external
    /// renderer's pipeline.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<TubeVertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1, // normal
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 24,
                    shader_location: 2, // center
                },
            ],
        }
    }
}

/// Settings that shape every tube built from a point run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeSettings {
    /// Cross-section radius.
    pub radius: f32,
    /// Divisions around the circumference (at least 3).
    pub radial_segments: u32,
    /// Axial samples between consecutive control points.
    pub segments_per_span: u32,
    /// Close both tube ends with triangle fans.
    pub cap_ends: bool,
}

impl TubeSettings {
    /// Open tube with the default resolution.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            radial_segments: RADIAL_SEGMENTS,
            segments_per_span: SEGMENTS_PER_SPAN,
            cap_ends: false,
        }
    }
}

/// Triangulated sweep surface, self-contained and renderer-ready.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeDescriptor {
    vertices: Vec<TubeVertex>,
    indices: Vec<u32>,
    bounding_center: Vec3,
    bounding_radius: f32,
}

impl TubeDescriptor {
    /// Mesh vertices.
    #[must_use]
    pub fn vertices(&self) -> &[TubeVertex] {
        &self.vertices
    }

    /// Triangle list indices into [`Self::vertices`].
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices (three per triangle).
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Vertex data as raw bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Bounding sphere as `(center, radius)`, including the tube thickness.
    #[must_use]
    pub fn bounds(&self) -> (Vec3, f32) {
        (self.bounding_center, self.bounding_radius)
    }
}

/// Build a tube of `radius` with `radial_segments` divisions through `run`.
///
/// # Errors
///
/// [`HelixError::InvalidGeometryInput`] when `run` has fewer than two
/// points; [`HelixError::InvalidParameter`] for a non-positive radius or
/// fewer than three radial segments.
pub fn build(
    run: &[Vec3],
    radius: f32,
    radial_segments: u32,
) -> Result<TubeDescriptor> {
    build_with(
        run,
        &TubeSettings {
            radial_segments,
            ..TubeSettings::new(radius)
        },
    )
}

/// [`build`] with full control over resolution and end caps.
///
/// # Errors
///
/// Same conditions as [`build`].
pub fn build_with(
    run: &[Vec3],
    settings: &TubeSettings,
) -> Result<TubeDescriptor> {
    if run.len() < 2 {
        return Err(HelixError::InvalidGeometryInput { points: run.len() });
    }
    if !(settings.radius.is_finite() && settings.radius > 0.0) {
        return Err(HelixError::invalid(
            "tube_radius",
            settings.radius,
            "must be positive and finite",
        ));
    }
    if settings.radial_segments < 3 {
        return Err(HelixError::invalid(
            "radial_segments",
            settings.radial_segments,
            "must be at least 3",
        ));
    }

    let path = spline::interpolate(run, settings.segments_per_span as usize);
    let radial = settings.radial_segments as usize;
    let (mut vertices, mut indices) = sweep(&path, settings.radius, radial);
    if settings.cap_ends {
        append_caps(&path, &mut vertices, &mut indices, radial);
    }

    let (center, centerline_radius) = bounding_sphere(run);
    Ok(TubeDescriptor {
        vertices,
        indices,
        bounding_center: center,
        bounding_radius: centerline_radius + settings.radius,
    })
}

/// Ring of `radial` vertices around every path point, stitched into quads.
fn sweep(
    path: &[SplinePoint],
    radius: f32,
    radial: usize,
) -> (Vec<TubeVertex>, Vec<u32>) {
    let num_rings = path.len();
    let mut vertices = Vec::with_capacity(num_rings * radial);
    let mut indices =
        Vec::with_capacity(num_rings.saturating_sub(1) * radial * 6);

    for point in path {
        for k in 0..radial {
            let angle = (k as f32 / radial as f32) * std::f32::consts::TAU;
            let offset = point.normal * angle.cos() + point.binormal * angle.sin();
            vertices.push(TubeVertex {
                position: (point.pos + offset * radius).into(),
                normal: offset.normalize_or_zero().into(),
                center: point.pos.into(),
            });
        }
    }

    for i in 0..num_rings.saturating_sub(1) {
        let ring = i * radial;
        let next_ring = (i + 1) * radial;

        for k in 0..radial {
            let k_next = (k + 1) % radial;

            let v0 = (ring + k) as u32;
            let v1 = (ring + k_next) as u32;
            let v2 = (next_ring + k) as u32;
            let v3 = (next_ring + k_next) as u32;

            // Two triangles per quad
            indices.extend_from_slice(&[v0, v2, v1]);
            indices.extend_from_slice(&[v1, v2, v3]);
        }
    }

    (vertices, indices)
}

/// Close both ends with a center vertex and a triangle fan.
fn append_caps(
    path: &[SplinePoint],
    vertices: &mut Vec<TubeVertex>,
    indices: &mut Vec<u32>,
    radial: usize,
) {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return;
    };
    let last_ring = (path.len() - 1) * radial;

    for (point, ring, outward) in
        [(first, 0, -first.tangent), (last, last_ring, last.tangent)]
    {
        let center = vertices.len() as u32;
        vertices.push(TubeVertex {
            position: point.pos.into(),
            normal: outward.into(),
            center: point.pos.into(),
        });
        for k in 0..radial {
            let a = (ring + k) as u32;
            let b = (ring + (k + 1) % radial) as u32;
            // Wind so the fan faces along `outward`
            if ring == 0 {
                indices.extend_from_slice(&[center, b, a]);
            } else {
                indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
}
