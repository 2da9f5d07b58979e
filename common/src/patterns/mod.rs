//! Procedural cell patterns for the loading animations.
//!
//! Every generator is a pure function of grid coordinate, progress and the
//! run's base seed. Nothing is stored per cell; the per-location noise comes
//! from [`spatial_hash`](crate::prng::spatial_hash) or
//! [`column_hash`](crate::prng::column_hash), so any subset of cells can be
//! redrawn in any order with an identical result.
//!
//! - [`WaveFill`]: a band sweeping from above the grid to below it
//! - [`RandomPop`]: cells pop in at staggered times, shrink, then vanish
//! - [`MatrixRain`]: columns fall at jittered speeds with alternating trails

mod matrix;
mod pop;
mod wave;

pub use matrix::{ColumnStream, MatrixRain};
pub use pop::RandomPop;
pub use wave::WaveFill;

use crate::animations::AnimationKind;
use crate::fixed::Fixed;

/// Percentage of cells drawn in the secondary colour.
pub const SECONDARY_PERCENT: u32 = 45;

/// Drawable weight of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    /// Nothing drawn.
    #[default]
    Empty,
    /// Small centred square.
    Partial,
    /// Large square.
    Full,
}

/// A cell's weight plus its palette choice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellVisual {
    pub state: CellState,
    /// `true` selects the secondary colour, `false` the foreground.
    pub secondary: bool,
}

impl CellVisual {
    pub const EMPTY: Self = Self {
        state: CellState::Empty,
        secondary: false,
    };

    #[inline]
    pub const fn full(secondary: bool) -> Self {
        Self {
            state: CellState::Full,
            secondary,
        }
    }

    #[inline]
    pub const fn partial(secondary: bool) -> Self {
        Self {
            state: CellState::Partial,
            secondary,
        }
    }

    /// Whether this cell produces a draw call.
    #[inline]
    pub const fn is_drawn(&self) -> bool { !matches!(self.state, CellState::Empty) }
}

/// A pattern that can be sampled at any cell of the grid.
pub trait PatternGenerator {
    /// Visual of the cell at `(row, col)` for the given progress and base seed.
    fn cell(
        &self,
        row: i32,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> CellVisual;
}

/// Colour choice shared by the wave and pop patterns (45% secondary).
#[inline]
pub const fn pick_secondary(rv2: u32) -> bool { rv2 % 100 < SECONDARY_PERCENT }

/// Generator selected by an animation kind.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    Wave(WaveFill),
    Pop(RandomPop),
    Matrix(MatrixRain),
}

impl Pattern {
    /// Build the generator for `kind` on a grid of `rows` rows.
    ///
    /// Returns `None` for [`AnimationKind::None`].
    pub const fn for_kind(
        kind: AnimationKind,
        rows: i32,
    ) -> Option<Self> {
        match kind {
            AnimationKind::None => None,
            AnimationKind::WaveFill => Some(Self::Wave(WaveFill::new(rows))),
            AnimationKind::RandomPop => Some(Self::Pop(RandomPop)),
            AnimationKind::MatrixRain => Some(Self::Matrix(MatrixRain::new(rows))),
        }
    }
}

impl PatternGenerator for Pattern {
    #[inline]
    fn cell(
        &self,
        row: i32,
        col: i32,
        progress: Fixed,
        seed: u32,
    ) -> CellVisual {
        match self {
            Self::Wave(p) => p.cell(row, col, progress, seed),
            Self::Pop(p) => p.cell(row, col, progress, seed),
            Self::Matrix(p) => p.cell(row, col, progress, seed),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
