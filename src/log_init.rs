//! File-backed logger for the `log` facade.
//!
//! The library crates only emit records; installing a sink is left to the
//! application. [`init_logger`] appends `[LEVEL] message` lines to a file.

use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub(crate) struct FileLogger {
    file_path: PathBuf,
    level: Level,
}

impl FileLogger {
    pub(crate) fn new(file_path: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            file_path: file_path.into(),
            level,
        }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a global logger appending debug-and-above records to `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    init_logger_with_level(path, LevelFilter::Debug)
}

pub fn init_logger_with_level(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let path = path.as_ref();
    OpenOptions::new().create(true).append(true).open(path)?;

    let max = level.to_level().unwrap_or(Level::Error);
    log::set_boxed_logger(Box::new(FileLogger::new(path, max)))?;
    log::set_max_level(level);
    Ok(())
}
