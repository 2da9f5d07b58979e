//! Grid renderer for the loading animations.
//!
//! Samples the active pattern at every cell and issues one `fill_solid` per
//! visible cell. The pass only reads the animation state: the base seed is
//! copied out once and every per-cell value is derived from that copy, so
//! redraws never disturb the run's PRNG stream.
//!
//! # Skipped Frames
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Animation idle | nothing drawn |
//! | `fade < FP_FADE_SPAN` | nothing drawn (visibility cutoff) |
//! | Empty grid | nothing drawn |

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::animations::AnimationState;
use crate::fixed::is_visible;
use crate::grid::GridGeometry;
use crate::patterns::{Pattern, PatternGenerator};

/// Draw the current animation frame. Returns the number of cells filled.
pub fn draw_animation<D, H>(
    display: &mut D,
    state: &AnimationState<H>,
    grid: &GridGeometry,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
    H: Copy + PartialEq + fmt::Debug,
{
    if !state.is_active() || !is_visible(state.fade()) || grid.is_empty() {
        return 0;
    }
    let Some(pattern) = Pattern::for_kind(state.kind(), grid.rows) else {
        return 0;
    };

    let seed = state.base_seed();
    let progress = state.progress();
    let mut filled = 0;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let visual = pattern.cell(row, col, progress, seed);
            if let Some(rect) = grid.cell_rect(row, col, visual.state) {
                display.fill_solid(&rect, grid.color(visual.secondary)).ok();
                filled += 1;
            }
        }
    }

    filled
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use core::convert::Infallible;

    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::animations::tests::{FakeScheduler, FakeSurface};
    use crate::animations::AnimationKind;
    use crate::colors::{CERULEAN, WHITE};
    use crate::fixed::FP_FADE_SPAN;
    use crate::patterns::CellVisual;

    /// Draw target that records every `fill_solid` call.
    pub(crate) struct RecordingTarget {
        pub size: Size,
        pub fills: Vec<(Rectangle, Rgb565)>,
        pub pixels: u32,
    }

    impl RecordingTarget {
        pub fn new(size: Size) -> Self {
            Self {
                size,
                fills: Vec::new(),
                pixels: 0,
            }
        }
    }

    impl OriginDimensions for RecordingTarget {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for RecordingTarget {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.pixels += pixels.into_iter().count() as u32;
            Ok(())
        }

        fn fill_solid(
            &mut self,
            area: &Rectangle,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.fills.push((*area, color));
            Ok(())
        }
    }

    fn grid_20x20() -> GridGeometry {
        GridGeometry::fit(Size::new(120, 120), 6, WHITE, CERULEAN)
    }

    fn started(kind: AnimationKind) -> (AnimationState<u32>, FakeScheduler) {
        let mut sched = FakeScheduler::default();
        let mut state = AnimationState::new(42);
        state.start(kind, 1000, &mut sched);
        (state, sched)
    }

    fn advance(
        state: &mut AnimationState<u32>,
        sched: &mut FakeScheduler,
        ticks: u32,
    ) {
        let mut surface = FakeSurface::default();
        for _ in 0..ticks {
            if let Some(h) = sched.fire() {
                state.on_timer(h, sched, &mut surface);
            }
        }
    }

    #[test]
    fn test_idle_draws_nothing() {
        let state: AnimationState<u32> = AnimationState::new(1);
        let mut target = RecordingTarget::new(Size::new(120, 120));
        assert_eq!(draw_animation(&mut target, &state, &grid_20x20()), 0);
        assert!(target.fills.is_empty());
    }

    #[test]
    fn test_fill_count_matches_pattern() {
        let (mut state, mut sched) = started(AnimationKind::WaveFill);
        advance(&mut state, &mut sched, 20);
        let grid = grid_20x20();
        let mut target = RecordingTarget::new(Size::new(120, 120));

        let filled = draw_animation(&mut target, &state, &grid);
        let pattern = Pattern::for_kind(AnimationKind::WaveFill, grid.rows).unwrap();
        let mut expected = Vec::new();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let visual: CellVisual = pattern.cell(row, col, state.progress(), state.base_seed());
                if let Some(rect) = grid.cell_rect(row, col, visual.state) {
                    expected.push((rect, grid.color(visual.secondary)));
                }
            }
        }
        assert!(filled > 0);
        assert_eq!(filled as usize, target.fills.len());
        assert_eq!(target.fills, expected);
        assert_eq!(target.pixels, 0, "renderer should only use fill_solid");
    }

    #[test]
    fn test_cutoff_below_fade_span() {
        for kind in [AnimationKind::WaveFill, AnimationKind::RandomPop, AnimationKind::MatrixRain] {
            let (mut state, mut sched) = started(kind);
            let grid = grid_20x20();
            let mut surface = FakeSurface::default();
            while let Some(h) = sched.fire() {
                state.on_timer(h, &mut sched, &mut surface);
                let mut target = RecordingTarget::new(Size::new(120, 120));
                draw_animation(&mut target, &state, &grid);
                if state.fade() < FP_FADE_SPAN {
                    assert!(target.fills.is_empty(), "{kind:?} drew at fade {}", state.fade());
                }
            }
        }
    }

    #[test]
    fn test_redraw_is_stable_and_leaves_seed() {
        let (mut state, mut sched) = started(AnimationKind::RandomPop);
        advance(&mut state, &mut sched, 15);
        let seed = state.base_seed();
        let grid = grid_20x20();

        let mut first = RecordingTarget::new(Size::new(120, 120));
        let mut second = RecordingTarget::new(Size::new(120, 120));
        draw_animation(&mut first, &state, &grid);
        draw_animation(&mut second, &state, &grid);
        assert_eq!(first.fills, second.fills);
        assert_eq!(state.base_seed(), seed);
    }

    #[test]
    fn test_zero_rows_draws_nothing_but_state_advances() {
        let (mut state, mut sched) = started(AnimationKind::MatrixRain);
        let grid = GridGeometry::fit(Size::new(120, 3), 6, WHITE, CERULEAN);
        assert_eq!(grid.rows, 0);
        let mut target = RecordingTarget::new(Size::new(120, 3));
        assert_eq!(draw_animation(&mut target, &state, &grid), 0);
        advance(&mut state, &mut sched, 3);
        assert_eq!(state.progress(), 15);
    }

    #[test]
    fn test_matrix_head_drawn_in_foreground() {
        let (mut state, mut sched) = started(AnimationKind::MatrixRain);
        // Progress 170: fast columns have already reached the bottom.
        advance(&mut state, &mut sched, 34);
        let grid = grid_20x20();
        let mut target = RecordingTarget::new(Size::new(120, 120));
        draw_animation(&mut target, &state, &grid);

        let rain = crate::patterns::MatrixRain::new(grid.rows);
        for col in 0..grid.cols {
            let Some(stream) = rain.column(col, state.progress(), state.base_seed()) else {
                continue;
            };
            let head = grid.cell_rect(stream.head_row, col, crate::patterns::CellState::Full).unwrap();
            assert!(target.fills.contains(&(head, WHITE)));
        }
    }
}
