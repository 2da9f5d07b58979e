//! Cell bitmaps for the clock face.
//!
//! Each glyph is a row-major array of cell codes:
//!
//! | Code | Cell    |
//! |------|---------|
//! | `0`  | empty   |
//! | `1`  | partial (edges and curves) |
//! | `2`  | full    |

/// A fixed-size cell bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub width: i32,
    pub height: i32,
    cells: &'static [u8],
}

impl Glyph {
    const fn new(
        width: i32,
        height: i32,
        cells: &'static [u8],
    ) -> Self {
        Self { width, height, cells }
    }

    /// Cell code at a glyph-local position.
    #[inline]
    pub fn code(
        &self,
        row: i32,
        col: i32,
    ) -> u8 {
        self.cells[(row * self.width + col) as usize]
    }
}

pub const DIGIT_WIDTH: i32 = 5;
pub const DIGIT_HEIGHT: i32 = 7;
pub const SMALL_WIDTH: i32 = 3;
pub const SMALL_HEIGHT: i32 = 5;

/// Width of the colon separator.
pub const COLON_WIDTH: i32 = 2;

/// Top rows of the two colon dots, relative to the time block.
pub const COLON_DOT_ROWS: [i32; 2] = [1, 4];

#[rustfmt::skip]
const DIGIT_CELLS: [[u8; 35]; 10] = [
    // 0
    [1,2,2,2,1,
     2,0,0,0,2,
     2,0,0,0,2,
     2,0,0,0,2,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,1],
    // 1
    [0,0,2,0,0,
     1,2,2,0,0,
     0,0,2,0,0,
     0,0,2,0,0,
     0,0,2,0,0,
     0,0,2,0,0,
     1,2,2,2,1],
    // 2
    [1,2,2,2,1,
     0,0,0,0,2,
     0,0,0,0,2,
     1,2,2,2,1,
     2,0,0,0,0,
     2,0,0,0,0,
     1,2,2,2,1],
    // 3
    [1,2,2,2,1,
     0,0,0,0,2,
     0,0,0,0,2,
     0,1,2,2,1,
     0,0,0,0,2,
     0,0,0,0,2,
     1,2,2,2,1],
    // 4
    [1,0,0,0,1,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,2,
     0,0,0,0,2,
     0,0,0,0,2,
     0,0,0,0,1],
    // 5
    [1,2,2,2,1,
     2,0,0,0,0,
     2,0,0,0,0,
     1,2,2,2,1,
     0,0,0,0,2,
     0,0,0,0,2,
     1,2,2,2,1],
    // 6
    [1,2,2,2,1,
     2,0,0,0,0,
     2,0,0,0,0,
     2,2,2,2,1,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,1],
    // 7
    [1,2,2,2,1,
     0,0,0,0,2,
     0,0,0,0,2,
     0,0,0,0,1,
     0,0,0,2,0,
     0,0,0,2,0,
     0,0,0,1,0],
    // 8
    [1,2,2,2,1,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,1,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,1],
    // 9
    [1,2,2,2,1,
     2,0,0,0,2,
     2,0,0,0,2,
     1,2,2,2,2,
     0,0,0,0,2,
     0,0,0,0,2,
     1,2,2,2,1],
];

#[rustfmt::skip]
const SMALL_DIGIT_CELLS: [[u8; 15]; 10] = [
    // 0
    [1,2,1,
     2,0,2,
     2,0,2,
     2,0,2,
     1,2,1],
    // 1
    [1,2,0,
     0,2,0,
     0,2,0,
     0,2,0,
     1,2,1],
    // 2
    [1,2,1,
     0,0,2,
     1,2,1,
     2,0,0,
     1,2,1],
    // 3
    [1,2,1,
     0,0,2,
     0,2,1,
     0,0,2,
     1,2,1],
    // 4
    [1,0,1,
     2,0,2,
     1,2,2,
     0,0,2,
     0,0,1],
    // 5
    [1,2,1,
     2,0,0,
     1,2,1,
     0,0,2,
     1,2,1],
    // 6
    [1,2,1,
     2,0,0,
     2,2,1,
     2,0,2,
     1,2,1],
    // 7
    [1,2,1,
     0,0,2,
     0,0,1,
     0,2,0,
     0,1,0],
    // 8
    [1,2,1,
     2,0,2,
     1,2,1,
     2,0,2,
     1,2,1],
    // 9
    [1,2,1,
     2,0,2,
     1,2,2,
     0,0,2,
     1,2,1],
];

/// Date separator. Drawn transparently: empty codes leave the grid untouched.
#[rustfmt::skip]
const SLASH_CELLS: [u8; 15] = [
    0,0,0,
    0,1,0,
    0,2,0,
    0,1,0,
    0,0,0,
];

/// Large 5x7 digit for the time. Values above 9 are clamped.
pub fn digit(value: u8) -> Glyph {
    let idx = usize::from(value.min(9));
    Glyph::new(DIGIT_WIDTH, DIGIT_HEIGHT, &DIGIT_CELLS[idx])
}

/// Small 3x5 digit for the date. Values above 9 are clamped.
pub fn small_digit(value: u8) -> Glyph {
    let idx = usize::from(value.min(9));
    Glyph::new(SMALL_WIDTH, SMALL_HEIGHT, &SMALL_DIGIT_CELLS[idx])
}

pub const SLASH: Glyph = Glyph::new(SMALL_WIDTH, SMALL_HEIGHT, &SLASH_CELLS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_dimensions() {
        for d in 0..10 {
            assert_eq!(digit(d).cells.len(), 35);
            assert_eq!(small_digit(d).cells.len(), 15);
        }
        assert_eq!(SLASH.cells.len(), 15);
    }

    #[test]
    fn test_codes_in_range() {
        for d in 0..10 {
            assert!(digit(d).cells.iter().all(|&c| c <= 2));
            assert!(small_digit(d).cells.iter().all(|&c| c <= 2));
        }
    }

    #[test]
    fn test_code_lookup() {
        let one = digit(1);
        assert_eq!(one.code(0, 2), 2);
        assert_eq!(one.code(1, 0), 1);
        assert_eq!(one.code(6, 4), 1);
        assert_eq!(SLASH.code(2, 1), 2);
        assert_eq!(SLASH.code(0, 0), 0);
    }

    #[test]
    fn test_out_of_range_digit_clamped() {
        assert_eq!(digit(12), digit(9));
        assert_eq!(small_digit(200), small_digit(9));
    }
}
