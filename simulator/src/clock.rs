//! Wall clock backed by `chrono::Local`.

use chrono::{DateTime, Datelike, Local, Timelike};
use gridspace_common::face::FaceTime;

/// Face values for a local timestamp.
pub fn face_time(now: &DateTime<Local>) -> FaceTime {
    FaceTime::new(now.hour() as u8, now.minute() as u8, now.day() as u8, now.month() as u8)
}

/// Seed for a new animation run: seconds since the epoch, truncated.
pub fn time_seed(now: &DateTime<Local>) -> u32 { now.timestamp() as u32 }
