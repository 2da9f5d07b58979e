//! Random pop: every cell runs its own short lifecycle.
//!
//! A cell starts at a random offset in `0..~0.5`, lasts [`FP_HALF`], and is
//! drawn Full for its first third, Partial for its second third, then hidden.

use super::{CellVisual, PatternGenerator, pick_secondary};
use crate::fixed::{FP_HALF, FP_ONE, Fixed};
use crate::prng::spatial_hash;

/// Start offsets are drawn from `0..START_RANGE` thousandths.
const START_RANGE: u32 = 500;

/// Lifetime of a single cell.
const CELL_DURATION: Fixed = FP_HALF;

/// End of the Full phase (~0.33 of the cell's life).
const FULL_UNTIL: Fixed = 85;

/// End of the Partial phase (~0.66 of the cell's life).
const PARTIAL_UNTIL: Fixed = 169;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RandomPop;

impl RandomPop {
    /// Start offset of a cell from its first hash value.
    #[inline]
    pub const fn cell_start(rv1: u32) -> Fixed { ((rv1 % START_RANGE) as Fixed) * FP_ONE / 1000 }

    /// Local progress of a cell, `0..FP_ONE` while alive.
    #[inline]
    pub const fn cell_progress(
        progress: Fixed,
        start: Fixed,
    ) -> Fixed {
        (progress - start) * FP_ONE / CELL_DURATION
    }
}

impl PatternGenerator for RandomPop {
    fn cell(
        &self,
        row: i32,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> CellVisual {
        let (rv1, rv2) = spatial_hash(seed, row, col);
        let local = Self::cell_progress(progress, Self::cell_start(rv1));

        if !(0..FP_ONE).contains(&local) {
            return CellVisual::EMPTY;
        }

        let secondary = pick_secondary(rv2);
        if local < FULL_UNTIL {
            CellVisual::full(secondary)
        } else if local < PARTIAL_UNTIL {
            CellVisual::partial(secondary)
        } else {
            CellVisual::EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CellState;

    #[test]
    fn test_cell_start_range() {
        assert_eq!(RandomPop::cell_start(0), 0);
        assert_eq!(RandomPop::cell_start(499), 127);
        assert_eq!(RandomPop::cell_start(500), 0);
        assert_eq!(RandomPop::cell_start(250), 64);
    }

    #[test]
    fn test_cell_progress_scales_by_duration() {
        assert_eq!(RandomPop::cell_progress(64, 0), 128);
        assert_eq!(RandomPop::cell_progress(10, 20), -20);
        assert_eq!(RandomPop::cell_progress(128, 0), FP_ONE);
    }

    #[test]
    fn test_lifecycle_full_then_partial_then_gone() {
        for row in 0..20 {
            for col in 0..20 {
                // Phase index: 0 = not started, 1 = full, 2 = partial, 3 = gone.
                let mut phase = 0;
                for progress in 0..=FP_ONE {
                    let cell = RandomPop.cell(row, col, progress, 42);
                    let next = match cell.state {
                        CellState::Full => 1,
                        CellState::Partial => 2,
                        CellState::Empty if phase == 0 => 0,
                        CellState::Empty => 3,
                    };
                    assert!(next >= phase, "cell ({row},{col}) went back at {progress}");
                    phase = next;
                }
                assert_eq!(phase, 3, "cell ({row},{col}) never finished");
            }
        }
    }

    #[test]
    fn test_nothing_drawn_at_progress_zero_unless_starting() {
        for row in 0..10 {
            for col in 0..10 {
                let (rv1, _) = spatial_hash(9, row, col);
                let cell = RandomPop.cell(row, col, 0, 9);
                assert_eq!(cell.is_drawn(), RandomPop::cell_start(rv1) == 0);
            }
        }
    }

    #[test]
    fn test_colour_follows_second_hash_value() {
        let (_, rv2) = spatial_hash(3, 2, 2);
        let (rv1, _) = spatial_hash(3, 2, 2);
        let start = RandomPop::cell_start(rv1);
        let cell = RandomPop.cell(2, 2, start, 3);
        assert_eq!(cell.state, CellState::Full);
        assert_eq!(cell.secondary, rv2 % 100 < 45);
    }
}
