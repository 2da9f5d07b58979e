//! Color constants for the watch face.
//!
//! Colors are `Rgb565`, the native format of small SPI panels and of the
//! simulator framebuffer. Standard colors come from the `RgbColor` trait;
//! the rest are picked to match the 64-color watch palette.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Background of the face.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Default foreground (digits, animation cells).
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Palette Colors
// =============================================================================

/// Light gray for the date, colon and leading zero. RGB888 0xAAAAAA.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Default secondary animation color (vivid cerulean, RGB888 0x00AAFF).
pub const CERULEAN: Rgb565 = Rgb565::new(0, 42, 31);

/// Dim green for overlay headings.
pub const GREEN: Rgb565 = Rgb565::new(0, 48, 0);

/// Warning text.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Error text.
pub const RED: Rgb565 = Rgb565::RED;

/// Dark gray for verbose log levels.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Convert a packed `0xRRGGBB` value to `Rgb565`.
///
/// Returns `None` if bits above the 24-bit color are set.
pub fn from_rgb888(packed: u32) -> Option<Rgb565> {
    if packed > 0x00FF_FFFF {
        return None;
    }
    let r = (packed >> 16) as u8;
    let g = (packed >> 8) as u8;
    let b = packed as u8;
    Some(Rgb888::new(r, g, b).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb888_extremes() {
        assert_eq!(from_rgb888(0x000000), Some(BLACK));
        assert_eq!(from_rgb888(0xFFFFFF), Some(WHITE));
        assert_eq!(from_rgb888(0x0100_0000), None);
    }

    #[test]
    fn test_from_rgb888_channels() {
        let red = from_rgb888(0xFF0000).unwrap();
        assert_eq!((red.r(), red.g(), red.b()), (31, 0, 0));
        let green = from_rgb888(0x00FF00).unwrap();
        assert_eq!((green.r(), green.g(), green.b()), (0, 63, 0));
    }
}
