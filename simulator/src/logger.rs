//! `log` backend for the simulator.
//!
//! Records go to stderr through `env_logger` (`RUST_LOG` sets the level).
//! Records from the engine crate are also queued and drained into the
//! [`EventLog`] once per frame, so warnings such as a rejected setting show
//! up in the overlay.

use std::sync::Mutex;

use gridspace_common::event_log::{EventLog, LogLevel};
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Target prefix of records forwarded to the overlay.
const ENGINE_TARGET: &str = "gridspace_common";

static FORWARDED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct SimLogger {
    inner: env_logger::Logger,
}

impl Log for SimLogger {
    fn enabled(
        &self,
        metadata: &Metadata<'_>,
    ) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(
        &self,
        record: &Record<'_>,
    ) {
        if !self.inner.matches(record) {
            return;
        }
        self.inner.log(record);
        if is_engine_target(record.target()) {
            forward(record.level(), record.args().to_string());
        }
    }

    fn flush(&self) { self.inner.flush(); }
}

/// Install the logger. Defaults to `info` when `RUST_LOG` is unset.
pub fn init() -> Result<(), SetLoggerError> {
    let inner = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).build();
    let max_level = inner.filter();
    log::set_boxed_logger(Box::new(SimLogger { inner }))?;
    log::set_max_level(max_level);
    Ok(())
}

/// Move queued engine records into the overlay log.
pub fn drain_into(
    event_log: &mut EventLog,
    now_ms: u32,
) {
    let Ok(mut queue) = FORWARDED.lock() else {
        return;
    };
    for (level, message) in queue.drain(..) {
        event_log.push(LogLevel::from(level), &message, now_ms);
    }
}

fn is_engine_target(target: &str) -> bool { target.starts_with(ENGINE_TARGET) }

fn forward(
    level: Level,
    message: String,
) {
    if let Ok(mut queue) = FORWARDED.lock() {
        queue.push((level, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_target_filter() {
        assert!(is_engine_target("gridspace_common"));
        assert!(is_engine_target("gridspace_common::config"));
        assert!(!is_engine_target("gridspace_simulator"));
        assert!(!is_engine_target("sdl2"));
    }

    #[test]
    fn test_drain_moves_records_into_log() {
        forward(Level::Warn, "setting animation=9 rejected".to_string());
        let mut event_log = EventLog::new();
        drain_into(&mut event_log, 1_500);

        let entry = event_log
            .iter()
            .find(|e| e.message.as_str() == "setting animation=9 rejected")
            .unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.timestamp_ms, 1_500);

        let mut again = EventLog::new();
        drain_into(&mut again, 1_600);
        assert!(again.iter().all(|e| e.message.as_str() != "setting animation=9 rejected"));
    }
}
