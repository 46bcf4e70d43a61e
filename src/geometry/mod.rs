//! Procedural helix geometry.
//!
//! Leaves of the pipeline, each a pure function of its inputs:
//!
//! - [`curve::sample`] turns [`params::HelixParameters`] into a [`Curve`]
//! - [`segment::segment`] splits a curve into overlapping point runs
//! - [`tube::build`] sweeps a circular cross-section along one run
//! - [`color::color_for`] picks a palette identity by segment index
//! - [`markers::markers`] places beads on the run boundaries

pub mod color;
pub mod curve;
pub mod markers;
pub mod params;
pub mod segment;
mod spline;
pub mod tube;

pub use color::{color_for, ColorId, PALETTE};
pub use curve::{sample, Curve};
pub use markers::{bead_instances, markers, BeadInstance, BEAD_RADIUS};
pub use params::{HelixParameters, ParameterBounds};
pub use segment::{segment, PointRun, CHUNK_SIZE};
pub use tube::{TubeDescriptor, TubeSettings, TubeVertex};
