//! Wave fill: a band sweeping down the grid.
//!
//! ```text
//! wave_row = progress * (rows + 10) / FP_FADE_START - 5
//! touched  = row <= wave_row + 5
//! ```
//!
//! At progress 0 the band's leading edge sits on row 0; at [`FP_FADE_START`]
//! it is five rows below the grid. Touched cells keep a fixed random weight
//! (15% empty, 35% partial, 50% full) for the rest of the run.

use super::{CellVisual, PatternGenerator, pick_secondary};
use crate::fixed::{FP_FADE_START, Fixed};
use crate::prng::spatial_hash;

/// Rows the band starts above the grid.
const WAVE_LEAD_ROWS: i32 = 5;

/// Extra rows travelled beyond the grid height (lead-in plus lead-out).
const WAVE_TRAVEL_EXTRA: i32 = 10;

const EMPTY_PERCENT: u32 = 15;
const PARTIAL_PERCENT: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveFill {
    rows: i32,
}

impl WaveFill {
    pub const fn new(rows: i32) -> Self { Self { rows } }

    /// Row index of the band centre (floor division, may be negative).
    #[inline]
    pub const fn wave_row(
        &self,
        progress: Fixed,
    ) -> i32 {
        (progress * (self.rows + WAVE_TRAVEL_EXTRA)).div_euclid(FP_FADE_START) - WAVE_LEAD_ROWS
    }

    /// Whether `row` has been reached by the band.
    #[inline]
    pub const fn is_touched(
        &self,
        row: i32,
        progress: Fixed,
    ) -> bool {
        row <= self.wave_row(progress) + WAVE_LEAD_ROWS
    }
}

impl PatternGenerator for WaveFill {
    fn cell(
        &self,
        row: i32,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> CellVisual {
        if !self.is_touched(row, progress) {
            return CellVisual::EMPTY;
        }

        let (rv1, rv2) = spatial_hash(seed, row, col);
        let weight = rv1 % 100;
        let secondary = pick_secondary(rv2);

        if weight < EMPTY_PERCENT {
            CellVisual::EMPTY
        } else if weight < PARTIAL_PERCENT {
            CellVisual::partial(secondary)
        } else {
            CellVisual::full(secondary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FP_ONE;
    use crate::patterns::CellState;

    #[test]
    fn test_wave_row_formula() {
        let wave = WaveFill::new(38);
        assert_eq!(wave.wave_row(0), -5);
        // 90 * 48 / 179 = 24 (floor)
        assert_eq!(wave.wave_row(90), 24 - 5);
        assert_eq!(wave.wave_row(FP_FADE_START), 38 + 5);
    }

    #[test]
    fn test_wave_starts_at_top_edge() {
        for rows in 6..60 {
            let wave = WaveFill::new(rows);
            assert!(wave.is_touched(0, 0));
            assert!(!wave.is_touched(1, 0), "rows={rows}");
        }
    }

    #[test]
    fn test_wave_covers_grid_at_fade_start() {
        for rows in 1..=100 {
            let wave = WaveFill::new(rows);
            assert!(wave.wave_row(FP_FADE_START) + 5 >= rows - 1, "rows={rows}");
        }
    }

    #[test]
    fn test_untouched_rows_are_empty() {
        let wave = WaveFill::new(30);
        for col in 0..20 {
            assert_eq!(wave.cell(29, col, 10, 42), CellVisual::EMPTY);
        }
    }

    #[test]
    fn test_touched_cell_uses_hash_thresholds() {
        let wave = WaveFill::new(20);
        for row in 0..20 {
            for col in 0..20 {
                let (rv1, rv2) = spatial_hash(42, row, col);
                let cell = wave.cell(row, col, FP_ONE, 42);
                let expected = match rv1 % 100 {
                    0..15 => CellState::Empty,
                    15..50 => CellState::Partial,
                    _ => CellState::Full,
                };
                assert_eq!(cell.state, expected);
                if cell.is_drawn() {
                    assert_eq!(cell.secondary, rv2 % 100 < 45);
                }
            }
        }
    }

    #[test]
    fn test_touched_cells_keep_their_weight() {
        let wave = WaveFill::new(20);
        let early = wave.cell(0, 3, 0, 7);
        for progress in (0..=FP_ONE).step_by(5) {
            assert_eq!(wave.cell(0, 3, progress, 7), early);
        }
    }
}
