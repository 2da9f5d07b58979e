//! In-memory event log for the on-screen debug overlay.
//!
//! A fixed-size ring of recent events, each with a level, a truncated message
//! and a millisecond timestamp. Oldest entries are dropped when full.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(LogLevel::Info, "Animation: MATRIX", now_ms);
//!
//! for entry in log.iter() {
//!     println!("{} {}", entry.level.prefix(), entry.message);
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GRAY, GREEN, RED, YELLOW};

/// Maximum number of entries kept.
pub const LOG_ENTRIES: usize = 12;

/// Maximum characters per message.
pub const LOG_MSG_LEN: usize = 32;

/// Severity of an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Overlay color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Trace,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

/// One logged event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String<LOG_MSG_LEN>,
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create an entry, truncating `message` to fit.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

/// Ring buffer of recent events.
pub struct EventLog {
    entries: Deque<LogEntry, LOG_ENTRIES>,
}

impl EventLog {
    pub const fn new() -> Self { Self { entries: Deque::new() } }

    /// Record an event, dropping the oldest one if full.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry::new(level, message, timestamp_ms)).ok();
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}
