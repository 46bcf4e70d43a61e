//! Partitioning a sampled curve into overlapping point runs.

use glam::Vec3;

use super::curve::Curve;

/// Number of curve steps covered by one tube segment.
pub const CHUNK_SIZE: usize = 10;

/// A borrowed run of `chunk_size + 1` consecutive curve points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRun<'a> {
    /// Position of this run in the partition.
    pub index: usize,
    /// The run's points; the first is shared with the previous run's last.
    pub points: &'a [Vec3],
}

/// Number of complete runs a curve of `point_count` points yields.
///
/// Points past the last complete run are dropped, never padded.
#[must_use]
pub fn run_count(point_count: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    point_count.saturating_sub(1) / chunk_size
}

/// Split `curve` into runs of `chunk_size + 1` points, each sharing its
/// boundary point with the next.
#[must_use]
pub fn segment(curve: &Curve, chunk_size: usize) -> Vec<PointRun<'_>> {
    let points = curve.points();
    (0..run_count(points.len(), chunk_size))
        .map(|index| {
            let start = index * chunk_size;
            PointRun {
                index,
                points: &points[start..=start + chunk_size],
            }
        })
        .collect()
}
