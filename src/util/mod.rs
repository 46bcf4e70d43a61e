//! Shared utilities for the frame loop.

/// Monotonic elapsed/delta source for the frame loop.
pub mod frame_clock;

pub use frame_clock::{FrameClock, FrameTick};
