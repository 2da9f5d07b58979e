//! Pre-computed text styles for the debug overlay.
//!
//! Styles are `const` so no style objects are built per frame. Level colors
//! vary per entry, so [`OVERLAY_FONT`] is exposed for
//! `MonoTextStyle::new(OVERLAY_FONT, color)`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_9_POINT;

use crate::colors::{GREEN, WHITE};

/// Left-aligned text for log lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text for the status line.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Log line font (6x10 pixels).
pub const OVERLAY_FONT: &MonoFont = &FONT_6X10;

/// Height of one log line in pixels.
pub const OVERLAY_LINE_HEIGHT: i32 = 12;

/// Plain white log message text.
pub const MESSAGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Overlay header.
pub const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, GREEN);
