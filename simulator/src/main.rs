//! GridSpace watch face simulator for desktop.
//!
//! Runs the common engine in an `embedded-graphics-simulator` window, with
//! the frame loop standing in for the watch's timer service and redraw
//! requests.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `S` | Restart the configured animation |
//! | `N` | Select the next animation kind |
//! | `T` | Toggle 12/24-hour clock |
//! | `D` | Toggle the event log overlay |
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the animation lifecycle on
//! stderr. Engine records that pass the filter also appear in the overlay.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod logger;
mod profiling;
mod scheduler;
mod timing;

use std::fmt::Write;
use std::thread;
use std::time::Instant;

use chrono::Local;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use gridspace_common::config::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, Settings, keys};
use gridspace_common::event_log::{EventLog, LOG_MSG_LEN, LogLevel};
use gridspace_common::face::{FaceGrid, FaceTime, draw_face};
use gridspace_common::overlay::draw_event_log;
use gridspace_common::{AnimationKind, AnimationState, GridGeometry, Surface, draw_animation};
use heapless::String;
use log::{debug, error, info};

use crate::clock::{face_time, time_seed};
use crate::profiling::FrameStats;
use crate::scheduler::{DirtyFlag, FrameScheduler};
use crate::timing::{FRAME_TIME, millis_since};

fn main() {
    if let Err(err) = logger::init() {
        eprintln!("logger already installed: {err}");
    }

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("GridSpace Sim", &output_settings);

    let boot = Instant::now();
    let mut settings = Settings::new();
    let mut grid = GridGeometry::fit(display.size(), CELL_SIZE, settings.fg_color, settings.secondary_color);
    let mut face = match FaceGrid::for_grid(&grid) {
        Ok(face) => face,
        Err(err) => {
            error!("cannot build face: {err}");
            return;
        }
    };
    info!("grid {}x{} cells, offset ({}, {})", grid.cols, grid.rows, grid.offset_x, grid.offset_y);

    let mut scheduler = FrameScheduler::new();
    let mut surface = DirtyFlag::default();
    let mut animation: AnimationState<u64> = AnimationState::new(time_seed(&Local::now()));
    let mut event_log = EventLog::new();
    let mut stats = FrameStats::new();
    let mut show_log = false;
    let mut shown_time: Option<FaceTime> = None;

    event_log.push(LogLevel::Info, "System started", 0);

    // Activation plays the configured animation once.
    start_animation(&mut animation, &settings, &mut scheduler, &mut event_log, 0);
    surface.mark_dirty();

    loop {
        let frame_start = Instant::now();
        let now_ms = millis_since(boot);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    animation.stop(&mut scheduler);
                    info!("quit");
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            start_animation(&mut animation, &settings, &mut scheduler, &mut event_log, now_ms);
                            surface.mark_dirty();
                        }
                        Keycode::N => {
                            let next = settings.animation.next();
                            if settings.apply(keys::ANIMATION, u32::from(next as u8)).is_ok() {
                                push_fmt(&mut event_log, LogLevel::Info, now_ms, format_args!("Kind: {next}"));
                                surface.mark_dirty();
                            }
                        }
                        Keycode::T => {
                            let value = u32::from(!settings.clock_24h);
                            if settings.apply(keys::CLOCK_24H, value).is_ok() {
                                push_fmt(
                                    &mut event_log,
                                    LogLevel::Info,
                                    now_ms,
                                    format_args!("Clock: {}h", if settings.clock_24h { 24 } else { 12 }),
                                );
                                shown_time = None;
                            }
                        }
                        Keycode::D => {
                            show_log = !show_log;
                            surface.mark_dirty();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Service animation ticks that came due since the last frame.
        let was_active = animation.is_active();
        for handle in scheduler.due(frame_start) {
            animation.on_timer(handle, &mut scheduler, &mut surface);
        }
        if was_active && !animation.is_active() {
            push_fmt(&mut event_log, LogLevel::Debug, now_ms, format_args!("{} finished", animation.kind()));
        }

        logger::drain_into(&mut event_log, now_ms);

        // Recompose the face when the minute (or the 12/24h setting) changes.
        let time = face_time(&Local::now());
        if shown_time != Some(time) {
            face.compose(&time, &settings);
            debug!("face {:02}:{:02} composed, {} cells lit", time.hour, time.minute, face.lit_count());
            shown_time = Some(time);
            surface.mark_dirty();
        }

        if surface.take() || show_log {
            grid = grid.with_colors(settings.fg_color, settings.secondary_color);
            display.clear(settings.bg_color).ok();

            let cells = if animation.is_active() {
                draw_animation(&mut display, &animation, &grid)
            } else {
                draw_face(&mut display, &face, &grid)
            };
            stats.record_redraw(cells);

            if show_log {
                let mut status: String<24> = String::new();
                write!(status, "{} {:.0}fps {}c", settings.animation, stats.fps(), stats.last_cells).ok();
                draw_event_log(&mut display, &event_log, &status);
            }
        }

        window.update(&display);
        stats.record_frame();

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn start_animation(
    animation: &mut AnimationState<u64>,
    settings: &Settings,
    scheduler: &mut FrameScheduler,
    event_log: &mut EventLog,
    now_ms: u32,
) {
    let kind = settings.animation;
    animation.start(kind, time_seed(&Local::now()), scheduler);
    if kind == AnimationKind::None {
        event_log.push(LogLevel::Info, "No animation", now_ms);
    } else {
        push_fmt(
            event_log,
            LogLevel::Info,
            now_ms,
            format_args!("Animation: {kind} #{}", animation.base_seed() % 10_000),
        );
    }
}

/// Format a message into the event log, truncating to the entry size.
fn push_fmt(
    event_log: &mut EventLog,
    level: LogLevel,
    now_ms: u32,
    args: std::fmt::Arguments<'_>,
) {
    let mut msg: String<LOG_MSG_LEN> = String::new();
    msg.write_fmt(args).ok();
    event_log.push(level, &msg, now_ms);
}
