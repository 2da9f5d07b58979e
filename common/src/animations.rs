//! Loading animation state machine.
//!
//! Owns progress, fade and the pending timer of one animation run, and drives
//! them from externally scheduled ticks. Drawing is done separately by
//! [`draw_animation`](crate::render::draw_animation), which reads this state.
//!
//! # Lifecycle
//!
//! ```text
//!          start(kind)                progress >= 179          progress >= 256
//! Idle ───────────────▶ Running ───────────────────▶ FadingOut ─────────────────▶ Idle
//!   ▲                                                                              │
//!   └──────────────────────────────── stop() ◀────────────────────────────────────┘
//! ```
//!
//! `start` while a run is active supersedes it (cancel and restart). `stop` is
//! idempotent and may be called from anywhere, including surface teardown.
//!
//! # Platform Capabilities
//!
//! The timer and the redraw request are injected through [`Scheduler`] and
//! [`Surface`], so the state machine runs unchanged on hardware, in the
//! desktop simulator, or synchronously under a fake scheduler in tests.

use core::fmt;

use log::{debug, trace};

use crate::config::ConfigError;
use crate::fixed::{ANIM_FP_STEP, FP_FADE_START, FP_ONE, Fixed, fade_for_progress};
use crate::prng::Prng;

/// Tick period in milliseconds (~30 Hz).
pub const TICK_PERIOD_MS: u32 = 33;

/// Mask applied to the PRNG draw mixed into each run's seed.
const RESEED_MIX_MASK: u32 = 0xFF;

// =============================================================================
// Animation Kind
// =============================================================================

/// Which loading animation plays. Encoded as `0..=3` in configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum AnimationKind {
    /// No animation; the face appears immediately.
    #[default]
    None = 0,
    WaveFill = 1,
    RandomPop = 2,
    MatrixRain = 3,
}

impl AnimationKind {
    /// Cycle to the next kind: None -> Wave -> Pop -> Matrix -> None
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::WaveFill,
            Self::WaveFill => Self::RandomPop,
            Self::RandomPop => Self::MatrixRain,
            Self::MatrixRain => Self::None,
        }
    }

    /// Short label for logs and overlays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::WaveFill => "WAVE",
            Self::RandomPop => "POP",
            Self::MatrixRain => "MATRIX",
        }
    }
}

impl TryFrom<u8> for AnimationKind {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::WaveFill),
            2 => Ok(Self::RandomPop),
            3 => Ok(Self::MatrixRain),
            other => Err(ConfigError::UnknownAnimation(u32::from(other))),
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Platform Capabilities
// =============================================================================

/// One-shot timer service.
///
/// A cancelled handle must never fire afterwards.
pub trait Scheduler {
    type Handle: Copy + PartialEq + fmt::Debug;

    /// Arrange for a single tick after `period_ms` milliseconds.
    fn schedule_once(
        &mut self,
        period_ms: u32,
    ) -> Self::Handle;

    /// Cancel a pending tick. Cancelling a fired or unknown handle is a no-op.
    fn cancel(
        &mut self,
        handle: Self::Handle,
    );
}

/// The display surface that owns the animation.
pub trait Surface {
    /// Request a redraw.
    fn mark_dirty(&mut self);
}

// =============================================================================
// Animation State
// =============================================================================

/// Coarse state of a run, derived from `active` and `progress`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Running,
    FadingOut,
}

/// State of the loading animation for one display surface.
pub struct AnimationState<H> {
    kind: AnimationKind,
    progress: Fixed,
    fade: Fixed,
    active: bool,
    timer: Option<H>,
    prng: Prng,
}

impl<H: Copy + PartialEq + fmt::Debug> AnimationState<H> {
    /// Create an idle state. `seed` primes the PRNG (typically wall-clock time).
    pub const fn new(seed: u32) -> Self {
        Self {
            kind: AnimationKind::None,
            progress: 0,
            fade: FP_ONE,
            active: false,
            timer: None,
            prng: Prng::new(seed),
        }
    }

    /// Start a run of `kind`, superseding any run in progress.
    ///
    /// `time_seed` should differ between runs (e.g. the current time); it is
    /// mixed with one PRNG draw so two runs in the same second still differ.
    pub fn start<S>(
        &mut self,
        kind: AnimationKind,
        time_seed: u32,
        scheduler: &mut S,
    ) where
        S: Scheduler<Handle = H>,
    {
        if self.active {
            trace!("animation {} superseded at progress {}", self.kind, self.progress);
        }
        self.cancel_timer(scheduler);

        if kind == AnimationKind::None {
            self.kind = AnimationKind::None;
            self.active = false;
            return;
        }

        self.kind = kind;
        self.progress = 0;
        self.fade = FP_ONE;
        self.active = true;

        let mix = self.prng.next() & RESEED_MIX_MASK;
        self.prng.seed(time_seed.wrapping_add(mix));

        self.timer = Some(scheduler.schedule_once(TICK_PERIOD_MS));
        debug!("animation {} started, seed {}", kind, self.prng.state());
    }

    /// Handle a fired timer.
    ///
    /// Advances one step, requests a redraw, and reschedules while the run is
    /// still active. A tick arriving after `stop` is ignored. The pending
    /// handle is assumed to be the one that fired; hosts that may deliver
    /// ticks of superseded runs should call [`on_timer`](Self::on_timer).
    pub fn tick<S, F>(
        &mut self,
        scheduler: &mut S,
        surface: &mut F,
    ) where
        S: Scheduler<Handle = H>,
        F: Surface,
    {
        if !self.active {
            return;
        }
        // The pending handle is the one that just fired.
        self.timer = None;

        let still_active = self.advance();
        surface.mark_dirty();

        if still_active {
            self.timer = Some(scheduler.schedule_once(TICK_PERIOD_MS));
        } else {
            self.stop(scheduler);
            debug!("animation {} finished", self.kind);
        }
    }

    /// Like [`tick`](Self::tick), but only if `fired` is the pending handle.
    ///
    /// Lets a host drop ticks of superseded runs that were already queued.
    pub fn on_timer<S, F>(
        &mut self,
        fired: H,
        scheduler: &mut S,
        surface: &mut F,
    ) where
        S: Scheduler<Handle = H>,
        F: Surface,
    {
        if self.timer == Some(fired) {
            self.tick(scheduler, surface);
        } else {
            trace!("stale animation tick {fired:?} ignored");
        }
    }

    /// Cancel the pending tick and go idle. Idempotent.
    pub fn stop<S>(
        &mut self,
        scheduler: &mut S,
    ) where
        S: Scheduler<Handle = H>,
    {
        self.cancel_timer(scheduler);
        self.active = false;
    }

    /// Apply one step of the progress/fade update rule.
    ///
    /// Returns `false` once progress reaches `FP_ONE`.
    fn advance(&mut self) -> bool {
        self.progress = (self.progress + ANIM_FP_STEP).min(FP_ONE);
        if self.progress >= FP_FADE_START {
            self.fade = fade_for_progress(self.progress);
        }
        self.progress < FP_ONE
    }

    fn cancel_timer<S>(
        &mut self,
        scheduler: &mut S,
    ) where
        S: Scheduler<Handle = H>,
    {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    #[inline]
    pub const fn kind(&self) -> AnimationKind { self.kind }

    #[inline]
    pub const fn progress(&self) -> Fixed { self.progress }

    #[inline]
    pub const fn fade(&self) -> Fixed { self.fade }

    #[inline]
    pub const fn is_active(&self) -> bool { self.active }

    /// Handle of the pending tick, if any.
    #[inline]
    pub const fn timer(&self) -> Option<H> { self.timer }

    /// Base seed of the current run, used for all per-cell noise.
    #[inline]
    pub const fn base_seed(&self) -> u32 { self.prng.state() }

    pub const fn phase(&self) -> Phase {
        if !self.active {
            Phase::Idle
        } else if self.progress < FP_FADE_START {
            Phase::Running
        } else {
            Phase::FadingOut
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
