//! Frame statistics for the overlay status line.
//!
//! FPS is averaged over one-second windows; `last_cells` is the number of
//! cells the most recent redraw filled.

use std::time::{Duration, Instant};

/// Frame rate and draw counters.
pub struct FrameStats {
    /// Cells filled by the most recent redraw.
    pub last_cells: u32,
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            last_cells: 0,
            window_start: Instant::now(),
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Count one pass of the frame loop; FPS is recomputed once per second.
    pub fn record_frame(&mut self) {
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_frames = 0;
            self.window_start = Instant::now();
        }
    }

    pub fn record_redraw(
        &mut self,
        cells: u32,
    ) {
        self.last_cells = cells;
    }

    #[inline]
    pub const fn fps(&self) -> f32 { self.fps }
}

impl Default for FrameStats {
    fn default() -> Self { Self::new() }
}
