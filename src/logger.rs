/*
 * Sink Logger
 *
 * A `log` backend that renders records through a debug sink, so code using
 * `log::info!` and friends ends up on the same serial line as direct output.
 *
 * Why this is important:
 * - Libraries that only know the `log` facade still reach the serial line
 * - Records are filtered by level before any formatting happens
 * - Direct output and log records share one lock and never interleave
 */

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use spin::Mutex;

use crate::sink::DebugOutput;

/// `log::Log` implementation over a locked sink.
pub struct SinkLogger<S> {
    sink: Mutex<S>,
    level: LevelFilter,
}

impl<S: DebugOutput> SinkLogger<S> {
    /// Creates a logger writing records up to `level` to `sink`.
    ///
    /// # Arguments
    ///
    /// * `sink` - The sink records are rendered through.
    /// * `level` - Most verbose level that is written.
    pub const fn new(sink: S, level: LevelFilter) -> Self {
        SinkLogger {
            sink: Mutex::new(sink),
            level,
        }
    }

    /// Most verbose level this logger writes.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Runs `f` with the sink locked. Do not log from inside `f`: the lock is
    /// not reentrant.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.sink.lock())
    }

    /// Locks the sink for direct output.
    pub fn lock(&self) -> spin::MutexGuard<'_, S> {
        self.sink.lock()
    }
}

impl<S: DebugOutput + Send + 'static> SinkLogger<S> {
    /// Installs this logger as the global `log` backend.
    ///
    /// Only the first installation in a program succeeds.
    ///
    /// # Returns
    ///
    /// `Err(SetLoggerError)` if a logger is already installed.
    pub fn init(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(self.level);
        log::info!("Logger initialized");
        Ok(())
    }
}

impl<S: DebugOutput + Send> log::Log for SinkLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut sink = self.sink.lock();
            sink.printf(format_args!("[{}] {}", record.level(), record.args()));
            sink.newline();
        }
    }

    fn flush(&self) {}
}
