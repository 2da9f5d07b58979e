//! Event log overlay drawn on top of the face.
//!
//! # Layout
//!
//! ```text
//! EVENTS                 WAVE     (header, current animation)
//! [I]01234 Animation: WAVE        (entries, oldest first)
//! [D]01300 Run finished
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BLACK;
use crate::event_log::{EventLog, LogEntry};
use crate::styles::{HEADER_STYLE, LEFT_ALIGNED, MESSAGE_STYLE, OVERLAY_FONT, OVERLAY_LINE_HEIGHT, RIGHT_ALIGNED};

const MARGIN: i32 = 2;

/// Message column; the prefix is 8 characters of 6 px.
const MESSAGE_X: i32 = MARGIN + 8 * 6 + 2;

/// Draw the overlay: a header with `status` on the right and one line per
/// log entry. Lines that would fall off the bottom are skipped.
pub fn draw_event_log<D>(
    display: &mut D,
    log: &EventLog,
    status: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let width = display.bounding_box().size.width;
    let height = display.bounding_box().size.height as i32;
    let lines = log.len() as i32 + 1;
    let panel_height = (lines * OVERLAY_LINE_HEIGHT + MARGIN).min(height);

    display
        .fill_solid(&Rectangle::new(Point::zero(), Size::new(width, panel_height as u32)), BLACK)
        .ok();

    let mut y = OVERLAY_LINE_HEIGHT - MARGIN;
    Text::with_text_style("EVENTS", Point::new(MARGIN, y), HEADER_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(status, Point::new(width as i32 - MARGIN, y), HEADER_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    for entry in log.iter() {
        y += OVERLAY_LINE_HEIGHT;
        if y > height {
            break;
        }
        draw_entry(display, entry, y);
    }
}

fn draw_entry<D>(
    display: &mut D,
    entry: &LogEntry,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level_style = MonoTextStyle::new(OVERLAY_FONT, entry.level.color());

    // [L]TTTTT, timestamp wraps at 100 s
    let mut prefix: String<12> = String::new();
    write!(prefix, "[{}]{:05}", entry.level.prefix(), entry.timestamp_ms % 100_000).ok();

    Text::new(&prefix, Point::new(MARGIN, y), level_style).draw(display).ok();
    Text::new(entry.message.as_str(), Point::new(MESSAGE_X, y), MESSAGE_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::LogLevel;
    use crate::render::tests::RecordingTarget;

    #[test]
    fn test_empty_log_draws_header_only() {
        let mut target = RecordingTarget::new(Size::new(200, 228));
        draw_event_log(&mut target, &EventLog::new(), "WAVE");
        assert_eq!(target.fills.len(), 1);
        assert_eq!(target.fills[0].0.size, Size::new(200, 14));
        assert!(target.pixels > 0);
    }

    #[test]
    fn test_panel_grows_with_entries() {
        let mut log = EventLog::new();
        log.push(LogLevel::Info, "Animation: WAVE", 1_234);
        log.push(LogLevel::Debug, "Run finished", 2_960);

        let mut header_only = RecordingTarget::new(Size::new(200, 228));
        draw_event_log(&mut header_only, &EventLog::new(), "");
        let mut target = RecordingTarget::new(Size::new(200, 228));
        draw_event_log(&mut target, &log, "");

        assert_eq!(target.fills[0].0.size.height, 3 * 12 + 2);
        assert!(target.pixels > header_only.pixels);
    }

    #[test]
    fn test_panel_clamped_to_screen() {
        let mut log = EventLog::new();
        for i in 0..12 {
            log.push(LogLevel::Trace, "tick", i);
        }
        let mut target = RecordingTarget::new(Size::new(100, 40));
        draw_event_log(&mut target, &log, "");
        assert_eq!(target.fills[0].0.size.height, 40);
    }
}
