//! Matrix rain: independent falling columns.
//!
//! The hash key is the column alone, so one `(rv1, rv2)` pair controls a
//! whole column: its start delay (`0..~0.2`) and its speed (0.8..1.2 in 8.8).
//!
//! ```text
//! row   trail  drawn as
//!  0      4    Full  secondary
//!  1      3    Partial foreground
//!  2      2    Full  secondary
//!  3      1    Partial foreground
//!  4      0    Full  foreground   <- head
//!  5      -    nothing
//! ```
//!
//! Once a column has fallen past the bottom, its head stays on the last row
//! and the trail above it freezes, so every started column keeps exactly one
//! head.

use super::{CellVisual, PatternGenerator};
use crate::fixed::{FP_FADE_START, FP_ONE, Fixed, fp_mul};
use crate::prng::column_hash;

/// Start delays are drawn from `0..START_RANGE` thousandths.
const START_RANGE: u32 = 200;

/// Slowest column speed (0.8).
const SPEED_MIN: Fixed = 205;

/// Speed jitter range (adds up to ~0.4).
const SPEED_JITTER: u32 = 102;

/// Timing of one falling column for a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnStream {
    /// Delay before the column starts falling.
    pub start: Fixed,
    /// Speed multiplier (8.8).
    pub speed: Fixed,
    /// Column-local progress, never negative.
    pub progress: Fixed,
    /// Row given by the fall formula. May be past the bottom of the grid.
    pub fall_row: i32,
    /// Row of the head: `fall_row` held at the last grid row.
    pub head_row: i32,
}

impl ColumnStream {
    /// Visual of `row` within this column.
    pub const fn cell(
        &self,
        row: i32,
    ) -> CellVisual {
        if row > self.head_row {
            return CellVisual::EMPTY;
        }
        let trail = self.head_row - row;
        if trail == 0 {
            CellVisual::full(false)
        } else if trail % 2 == 0 {
            CellVisual::full(true)
        } else {
            CellVisual::partial(false)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixRain {
    rows: i32,
}

impl MatrixRain {
    pub const fn new(rows: i32) -> Self { Self { rows } }

    /// Derive a column's stream from its hash pair.
    ///
    /// Returns `None` while the column has not started yet.
    pub const fn stream(
        &self,
        rv1: u32,
        rv2: u32,
        progress: Fixed,
    ) -> Option<ColumnStream> {
        let start = ((rv1 % START_RANGE) as Fixed) * FP_ONE / 1000;
        let speed = SPEED_MIN + (rv2 % SPEED_JITTER) as Fixed;
        let col_progress = fp_mul(progress - start, speed);
        if col_progress < 0 {
            return None;
        }
        let fall_row = col_progress * self.rows / FP_FADE_START;
        let head_row = if self.rows > 0 && fall_row >= self.rows { self.rows - 1 } else { fall_row };
        Some(ColumnStream {
            start,
            speed,
            progress: col_progress,
            fall_row,
            head_row,
        })
    }

    /// Stream for column `col` under base seed `seed`.
    #[inline]
    pub const fn column(
        &self,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> Option<ColumnStream> {
        let (rv1, rv2) = column_hash(seed, col);
        self.stream(rv1, rv2, progress)
    }
}

impl PatternGenerator for MatrixRain {
    fn cell(
        &self,
        row: i32,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> CellVisual {
        match self.column(col, progress, seed) {
            Some(stream) => stream.cell(row),
            None => CellVisual::EMPTY,
        }
    }
}
