//! Grid geometry: where each cell of the dot grid lands on screen.
//!
//! # Layout
//!
//! The grid fills the screen with whole cells and is centred by splitting
//! the leftover pixels. Each cell has two drawable squares:
//!
//! ```text
//!  6 px cell      Full (4x4 @ 1)     Partial (2x2 @ 2)
//! ┌──────┐       ┌──────┐           ┌──────┐
//! │      │       │ ████ │           │      │
//! │      │       │ ████ │           │  ██  │
//! │      │       │ ████ │           │  ██  │
//! │      │       │ ████ │           │      │
//! └──────┘       └──────┘           └──────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::patterns::CellState;

/// Pixel geometry and palette of a dot grid.
///
/// Immutable for one animation run; rebuild it when the screen changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub cols: i32,
    pub rows: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub cell_size: u32,
    pub full_size: u32,
    pub full_offset: u32,
    pub partial_size: u32,
    pub partial_offset: u32,
    pub fg_color: Rgb565,
    pub secondary_color: Rgb565,
}

impl GridGeometry {
    /// Fit a grid of `cell_size` cells to a screen.
    pub const fn fit(
        screen: Size,
        cell_size: u32,
        fg_color: Rgb565,
        secondary_color: Rgb565,
    ) -> Self {
        if cell_size == 0 {
            return Self::empty(fg_color, secondary_color);
        }
        let cols = screen.width / cell_size;
        let rows = screen.height / cell_size;
        let full_size = cell_size.saturating_sub(2);
        let partial_size = cell_size / 3;
        Self {
            cols: cols as i32,
            rows: rows as i32,
            offset_x: ((screen.width - cols * cell_size) / 2) as i32,
            offset_y: ((screen.height - rows * cell_size) / 2) as i32,
            cell_size,
            full_size,
            full_offset: (cell_size - full_size) / 2,
            partial_size,
            partial_offset: (cell_size - partial_size) / 2,
            fg_color,
            secondary_color,
        }
    }

    /// A grid with no cells.
    pub const fn empty(
        fg_color: Rgb565,
        secondary_color: Rgb565,
    ) -> Self {
        Self {
            cols: 0,
            rows: 0,
            offset_x: 0,
            offset_y: 0,
            cell_size: 0,
            full_size: 0,
            full_offset: 0,
            partial_size: 0,
            partial_offset: 0,
            fg_color,
            secondary_color,
        }
    }

    /// Replace the palette, keeping the geometry.
    pub const fn with_colors(
        self,
        fg_color: Rgb565,
        secondary_color: Rgb565,
    ) -> Self {
        Self {
            fg_color,
            secondary_color,
            ..self
        }
    }

    /// Top-left pixel of a cell.
    #[inline]
    pub const fn cell_origin(
        &self,
        row: i32,
        col: i32,
    ) -> Point {
        Point::new(
            self.offset_x + col * self.cell_size as i32,
            self.offset_y + row * self.cell_size as i32,
        )
    }

    /// Rectangle to fill for a cell in the given state, `None` when empty.
    pub const fn cell_rect(
        &self,
        row: i32,
        col: i32,
        state: CellState,
    ) -> Option<Rectangle> {
        let (offset, size) = match state {
            CellState::Empty => return None,
            CellState::Partial => (self.partial_offset, self.partial_size),
            CellState::Full => (self.full_offset, self.full_size),
        };
        let origin = self.cell_origin(row, col);
        Some(Rectangle::new(
            Point::new(origin.x + offset as i32, origin.y + offset as i32),
            Size::new(size, size),
        ))
    }

    /// Color for a cell's palette choice.
    #[inline]
    pub const fn color(
        &self,
        secondary: bool,
    ) -> Rgb565 {
        if secondary { self.secondary_color } else { self.fg_color }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.cols <= 0 || self.rows <= 0 }
}
