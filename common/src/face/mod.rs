//! Dot-grid clock face shown between animation runs.
//!
//! The face is composed into a [`FaceGrid`] once per minute and drawn onto the
//! same cell grid the animations use.
//!
//! # Layout
//!
//! ```text
//! ┌<──────────────────────>┐
//! │                        │
//! │   ██  ██  :  ██  ██    │  time HH:MM, 5x7 digits (7 rows)
//! │                        │  2-row gap
//! │     ▪ ▪  /  ▪ ▪        │  date DD/MM, 3x5 digits (5 rows)
//! │                        │
//! └<──────────────────────>┘
//! ```
//!
//! Grids wider than [`WIDE_GRID_COLS`] put one spacer column between glyphs:
//!
//! | Block | Spaced | Tight |
//! |-------|--------|-------|
//! | Time  | 26     | 22    |
//! | Date  | 19     | 15    |

pub mod glyphs;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;

use crate::colors::LIGHT_GRAY;
use crate::config::{ConfigError, Settings, WIDE_GRID_COLS};
use crate::grid::GridGeometry;
use crate::patterns::CellState;

use self::glyphs::{COLON_DOT_ROWS, COLON_WIDTH, DIGIT_HEIGHT, DIGIT_WIDTH, Glyph, SLASH, SMALL_HEIGHT, SMALL_WIDTH};

/// Largest grid the face buffer holds (64x64 cells).
pub const MAX_FACE_CELLS: usize = 64 * 64;

const TIME_WIDTH_SPACED: i32 = 26;
const TIME_WIDTH_TIGHT: i32 = 22;
const DATE_WIDTH_SPACED: i32 = 19;
const DATE_WIDTH_TIGHT: i32 = 15;

/// Rows between the time and date blocks.
const BLOCK_GAP: i32 = 2;

/// Height of the composed block (time + gap + date).
const FACE_HEIGHT: i32 = DIGIT_HEIGHT + BLOCK_GAP + SMALL_HEIGHT;

/// One cell of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FaceCell {
    #[default]
    Empty = 0,
    Partial = 1,
    Full = 2,
    Gray = 3,
    GrayPartial = 4,
}

impl FaceCell {
    /// Cell for a glyph code, optionally in gray.
    const fn from_code(
        code: u8,
        gray: bool,
    ) -> Self {
        match (code, gray) {
            (0, _) => Self::Empty,
            (2, false) => Self::Full,
            (2, true) => Self::Gray,
            (_, false) => Self::Partial,
            (_, true) => Self::GrayPartial,
        }
    }

    /// Drawn size and whether it uses the gray color.
    const fn style(self) -> (CellState, bool) {
        match self {
            Self::Empty => (CellState::Empty, false),
            Self::Partial => (CellState::Partial, false),
            Self::Full => (CellState::Full, false),
            Self::Gray => (CellState::Full, true),
            Self::GrayPartial => (CellState::Partial, true),
        }
    }
}

/// Wall-clock values shown on the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FaceTime {
    /// 0-23
    pub hour: u8,
    pub minute: u8,
    /// 1-31
    pub day: u8,
    /// 1-12
    pub month: u8,
}

impl FaceTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        day: u8,
        month: u8,
    ) -> Self {
        Self { hour, minute, day, month }
    }

    /// Hour as displayed; 12-hour mode maps 0 to 12.
    pub const fn display_hour(
        &self,
        clock_24h: bool,
    ) -> u8 {
        if clock_24h {
            return self.hour;
        }
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

// =============================================================================
// Face Grid
// =============================================================================

/// Cell buffer of the clock face, row-major.
pub struct FaceGrid {
    cols: i32,
    rows: i32,
    cells: Vec<FaceCell, MAX_FACE_CELLS>,
}

impl FaceGrid {
    /// Empty face of `cols` x `rows` cells.
    pub fn new(
        cols: i32,
        rows: i32,
    ) -> Result<Self, ConfigError> {
        let cols = cols.max(0);
        let rows = rows.max(0);
        let mut cells = Vec::new();
        cells
            .resize((cols * rows) as usize, FaceCell::Empty)
            .map_err(|_| ConfigError::GridTooLarge { cols, rows })?;
        Ok(Self { cols, rows, cells })
    }

    /// Face sized for a grid geometry.
    pub fn for_grid(grid: &GridGeometry) -> Result<Self, ConfigError> { Self::new(grid.cols, grid.rows) }

    #[inline]
    pub const fn cols(&self) -> i32 { self.cols }

    #[inline]
    pub const fn rows(&self) -> i32 { self.rows }

    /// Cell at a position; out-of-bounds reads are empty.
    pub fn get(
        &self,
        row: i32,
        col: i32,
    ) -> FaceCell {
        self.index(row, col).map_or(FaceCell::Empty, |i| self.cells[i])
    }

    /// Number of cells that draw something.
    pub fn lit_count(&self) -> usize { self.cells.iter().filter(|c| **c != FaceCell::Empty).count() }

    pub fn clear(&mut self) { self.cells.iter_mut().for_each(|c| *c = FaceCell::Empty); }

    /// Rebuild the face for a time and the current settings.
    pub fn compose(
        &mut self,
        time: &FaceTime,
        settings: &Settings,
    ) {
        self.clear();

        let spacing = i32::from(self.cols > WIDE_GRID_COLS);
        let (time_width, date_width) = if spacing == 1 {
            (TIME_WIDTH_SPACED, DATE_WIDTH_SPACED)
        } else {
            (TIME_WIDTH_TIGHT, DATE_WIDTH_TIGHT)
        };
        let color = settings.color_display;

        let top = (self.rows - FACE_HEIGHT) / 2;
        let date_row = top + DIGIT_HEIGHT + BLOCK_GAP;

        // Time
        let hour = time.display_hour(settings.clock_24h);
        let mut col = (self.cols - time_width) / 2;
        let h1 = hour / 10;
        if h1 != 0 {
            self.stamp(&glyphs::digit(h1), top, col, false, true);
        } else if color {
            self.stamp(&glyphs::digit(0), top, col, true, true);
        }
        col += DIGIT_WIDTH + spacing;
        self.stamp(&glyphs::digit(hour % 10), top, col, false, true);
        col += DIGIT_WIDTH + spacing;
        if color {
            self.colon(top, col);
        }
        col += COLON_WIDTH + spacing;
        self.stamp(&glyphs::digit(time.minute / 10), top, col, false, true);
        col += DIGIT_WIDTH + spacing;
        self.stamp(&glyphs::digit(time.minute % 10), top, col, false, true);

        // Date
        let mut col = (self.cols - date_width) / 2;
        self.stamp(&glyphs::small_digit(time.day / 10), date_row, col, color, true);
        col += SMALL_WIDTH + spacing;
        self.stamp(&glyphs::small_digit(time.day % 10), date_row, col, color, true);
        col += SMALL_WIDTH + spacing;
        self.stamp(&SLASH, date_row, col, color, false);
        col += SMALL_WIDTH + spacing;
        self.stamp(&glyphs::small_digit(time.month / 10), date_row, col, color, true);
        col += SMALL_WIDTH + spacing;
        self.stamp(&glyphs::small_digit(time.month % 10), date_row, col, color, true);

        self.corners();
    }

    fn index(
        &self,
        row: i32,
        col: i32,
    ) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }

    fn set(
        &mut self,
        row: i32,
        col: i32,
        cell: FaceCell,
    ) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Copy a glyph into the grid, clipping at the edges. Transparent stamps
    /// skip empty codes.
    fn stamp(
        &mut self,
        glyph: &Glyph,
        top: i32,
        left: i32,
        gray: bool,
        opaque: bool,
    ) {
        for r in 0..glyph.height {
            for c in 0..glyph.width {
                let code = glyph.code(r, c);
                if code == 0 && !opaque {
                    continue;
                }
                self.set(top + r, left + c, FaceCell::from_code(code, gray));
            }
        }
    }

    /// Two 2x2 dots of gray partial cells.
    fn colon(
        &mut self,
        top: i32,
        left: i32,
    ) {
        for dot in COLON_DOT_ROWS {
            for r in 0..2 {
                for c in 0..COLON_WIDTH {
                    self.set(top + dot + r, left + c, FaceCell::GrayPartial);
                }
            }
        }
    }

    /// Chevrons pointing inward from each corner.
    fn corners(&mut self) {
        if self.rows < 2 || self.cols < 2 {
            return;
        }
        let (last_row, last_col) = (self.rows - 1, self.cols - 1);

        self.set(0, 0, FaceCell::Partial);
        self.set(0, 1, FaceCell::Full);
        self.set(1, 0, FaceCell::Full);

        self.set(0, last_col - 1, FaceCell::Full);
        self.set(0, last_col, FaceCell::Partial);
        self.set(1, last_col, FaceCell::Full);

        self.set(last_row - 1, 0, FaceCell::Full);
        self.set(last_row, 0, FaceCell::Partial);
        self.set(last_row, 1, FaceCell::Full);

        self.set(last_row - 1, last_col, FaceCell::Full);
        self.set(last_row, last_col - 1, FaceCell::Full);
        self.set(last_row, last_col, FaceCell::Partial);
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the face onto the cell grid. Returns the number of cells filled.
///
/// Regular cells use the foreground color, gray cells [`LIGHT_GRAY`].
pub fn draw_face<D>(
    display: &mut D,
    face: &FaceGrid,
    grid: &GridGeometry,
) -> u32
where
    D: DrawTarget<Color = Rgb565>,
{
    let rows = face.rows().min(grid.rows);
    let cols = face.cols().min(grid.cols);
    let mut filled = 0;

    for row in 0..rows {
        for col in 0..cols {
            let (state, gray) = face.get(row, col).style();
            let Some(rect) = grid.cell_rect(row, col, state) else {
                continue;
            };
            let color = if gray { LIGHT_GRAY } else { grid.fg_color };
            display.fill_solid(&rect, color).ok();
            filled += 1;
        }
    }
    filled
}

// =============================================================================
// Tests
// =============================================================================
