//! Dot-grid loading animations and clock face.
//!
//! This crate contains the platform-agnostic engine shared by every host:
//!
//! - [`prng`]: 31-bit LCG and per-cell/per-column hashing
//! - [`fixed`]: 8.8 fixed-point progress and fade
//! - [`patterns`]: Wave fill, random pop and matrix rain generators
//! - [`animations`]: Run state machine driven by an injected scheduler
//! - [`grid`]: Cell geometry for a screen
//! - [`render`]: Draws the active animation onto a `DrawTarget`
//! - [`face`]: Clock face composed from cell glyphs
//! - [`config`]: Layout constants and user settings
//! - [`colors`]: RGB565 palette
//! - [`event_log`], [`overlay`], [`styles`]: On-screen debug log
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Time, timers and the display
//! are supplied by the host through [`animations::Scheduler`],
//! [`animations::Surface`] and `DrawTarget`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod event_log;
pub mod face;
pub mod fixed;
pub mod grid;
pub mod overlay;
pub mod patterns;
pub mod prng;
pub mod render;
pub mod styles;

// Re-export commonly used items
pub use animations::{AnimationKind, AnimationState, Phase, Scheduler, Surface};
pub use colors::*;
pub use config::*;
pub use face::{FaceCell, FaceGrid, FaceTime, draw_face};
pub use grid::GridGeometry;
pub use render::draw_animation;
