//! `log` backend writing one line per record to stderr.

use std::io::Write;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Fails if a logger is already set.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

/// `<timestamp> <LEVEL> <target>: <message>`
pub fn format_line(timestamp: &str, record: &Record<'_>) -> String {
    format!(
        "{} {:>5} {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let _ = writeln!(std::io::stderr().lock(), "{}", format_line(&timestamp, record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
