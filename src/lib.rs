// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Procedural geometry for an animated, parameterized helix tube.
//!
//! Scalar parameters (pitch, sample count, helix radius, tube radius,
//! rotation speed) become a sampled 3D curve, the curve is cut into
//! overlapping ten-step runs, and every run is swept into a colored tube
//! mesh. Drawing is left to an external renderer; this crate only hands it
//! vertex/index data, color identities, and per-frame transforms.
//!
//! # Key entry points
//!
//! - [`scene::HelixScene`] - the per-frame facade for a render loop
//! - [`scene::ParameterStore`] - parameter snapshots with memoized geometry
//! - [`geometry`] - the pure sampling, segmentation, and meshing stages
//! - [`options::Options`] - TOML-backed configuration and UI schema
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-synchronous. Geometry is rebuilt
//! only on the first frame after a parameter snapshot changes; animation and
//! camera state advance every frame and never touch geometry.

pub mod animation;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod options;
pub mod scene;
pub mod util;

pub use error::{HelixError, Result};
