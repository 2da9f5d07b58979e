//! Display configuration and user settings.
//!
//! Layout values are compile-time constants. User settings arrive from an
//! external configuration channel as key/value messages and are decoded by
//! [`Settings::apply`]; persistence of those settings lives outside this crate.

use embedded_graphics::pixelcolor::Rgb565;
use log::warn;

use crate::animations::AnimationKind;
use crate::colors::{BLACK, CERULEAN, WHITE, from_rgb888};

// =============================================================================
// Display Configuration
// =============================================================================

/// Default screen width in pixels (200x228 rectangular watch panel).
pub const SCREEN_WIDTH: u32 = 200;

/// Default screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 228;

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: u32 = 6;

/// Grids wider than this get a spacer column between glyphs.
pub const WIDE_GRID_COLS: i32 = 24;

// =============================================================================
// Errors
// =============================================================================

/// A configuration value that could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown animation kind {0} (expected 0-3)")]
    UnknownAnimation(u32),
    #[error("color {0:#x} is not a 24-bit RGB value")]
    InvalidColor(u32),
    #[error("unknown setting key")]
    UnknownKey,
    #[error("{cols}x{rows} grid exceeds the face buffer")]
    GridTooLarge { cols: i32, rows: i32 },
}

// =============================================================================
// Settings
// =============================================================================

/// Setting keys understood by [`Settings::apply`].
pub mod keys {
    pub const ANIMATION: &str = "animation";
    pub const FG_COLOR: &str = "fg_color";
    pub const SECONDARY_COLOR: &str = "secondary_color";
    pub const CLOCK_24H: &str = "clock_24h";
}

/// User-facing settings of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Animation played on each activation.
    pub animation: AnimationKind,
    pub fg_color: Rgb565,
    pub secondary_color: Rgb565,
    pub bg_color: Rgb565,
    /// 24-hour clock; 12-hour otherwise.
    pub clock_24h: bool,
    /// Whether the panel shows color. Gray elements are hidden when `false`.
    pub color_display: bool,
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            animation: AnimationKind::MatrixRain,
            fg_color: WHITE,
            secondary_color: CERULEAN,
            bg_color: BLACK,
            clock_24h: true,
            color_display: true,
        }
    }

    /// Apply one key/value configuration message.
    ///
    /// On error the current value is kept and a warning is logged.
    pub fn apply(
        &mut self,
        key: &str,
        value: u32,
    ) -> Result<(), ConfigError> {
        let result = self.decode(key, value);
        if let Err(err) = result {
            warn!("setting {key}={value} rejected: {err}");
        }
        result
    }

    fn decode(
        &mut self,
        key: &str,
        value: u32,
    ) -> Result<(), ConfigError> {
        match key {
            keys::ANIMATION => {
                let raw = u8::try_from(value).map_err(|_| ConfigError::UnknownAnimation(value))?;
                self.animation = AnimationKind::try_from(raw)?;
            }
            keys::FG_COLOR => self.fg_color = from_rgb888(value).ok_or(ConfigError::InvalidColor(value))?,
            keys::SECONDARY_COLOR => {
                self.secondary_color = from_rgb888(value).ok_or(ConfigError::InvalidColor(value))?;
            }
            keys::CLOCK_24H => self.clock_24h = value != 0,
            _ => return Err(ConfigError::UnknownKey),
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self { Self::new() }
}
