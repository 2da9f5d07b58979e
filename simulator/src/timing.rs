//! Timing helpers for the simulator.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they are defined here rather than in the common crate.

use std::time::{Duration, Instant};

/// Target frame time (~100 FPS). Shorter than the animation tick so ticks
/// are serviced close to their deadline.
pub const FRAME_TIME: Duration = Duration::from_millis(10);

/// Milliseconds since `start`, wrapping at `u32::MAX`.
pub fn millis_since(start: Instant) -> u32 { start.elapsed().as_millis() as u32 }
