//! Frame-loop implementations of the engine's platform capabilities.
//!
//! The simulator has no timer interrupts; pending ticks are deadlines that
//! the main loop polls once per frame with [`FrameScheduler::due`].

use std::time::{Duration, Instant};

use gridspace_common::animations::{Scheduler, Surface};

/// One-shot timers polled from the frame loop.
///
/// Handles increase monotonically and are never reused, so a stale handle can
/// not alias a newer timer.
#[derive(Default)]
pub struct FrameScheduler {
    last_handle: u64,
    pending: Vec<(u64, Instant)>,
}

impl FrameScheduler {
    pub fn new() -> Self { Self::default() }

    /// Remove and return every timer whose deadline has passed, earliest first.
    pub fn due(
        &mut self,
        now: Instant,
    ) -> Vec<u64> {
        let mut fired: Vec<(u64, Instant)> = Vec::new();
        self.pending.retain(|&(handle, deadline)| {
            if deadline <= now {
                fired.push((handle, deadline));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(handle, deadline)| (deadline, handle));
        fired.into_iter().map(|(handle, _)| handle).collect()
    }

    fn schedule_at(
        &mut self,
        deadline: Instant,
    ) -> u64 {
        self.last_handle += 1;
        self.pending.push((self.last_handle, deadline));
        self.last_handle
    }
}

impl Scheduler for FrameScheduler {
    type Handle = u64;

    fn schedule_once(
        &mut self,
        period_ms: u32,
    ) -> u64 {
        self.schedule_at(Instant::now() + Duration::from_millis(u64::from(period_ms)))
    }

    fn cancel(
        &mut self,
        handle: u64,
    ) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}

/// Redraw request flag for the simulator window.
#[derive(Default)]
pub struct DirtyFlag {
    dirty: bool,
}

impl DirtyFlag {
    /// Return whether a redraw was requested and clear the request.
    pub fn take(&mut self) -> bool { std::mem::take(&mut self.dirty) }
}

impl Surface for DirtyFlag {
    fn mark_dirty(&mut self) { self.dirty = true; }
}
