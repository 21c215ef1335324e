/*
 * Platform Debug Port
 *
 * The one process-wide sink on PC-compatible hardware: COM2, shared with
 * the `log` backend. It is built at compile time, never reset, and only
 * reached through the accessors below.
 */

use log::SetLoggerError;
use spin::MutexGuard;

use crate::config::{DEFAULT_LOG_LEVEL, ENABLED};
use crate::drivers::SerialPort;
use crate::io::Pio;
use crate::logger::SinkLogger;
use crate::sink::DebugOutput;
use crate::Dbg;

/// Sink type of the platform debug port.
pub type DebugPort = Dbg<SerialPort<Pio<u8>>>;

static LOGGER: SinkLogger<DebugPort> =
    SinkLogger::new(Dbg::new(SerialPort::com2()), DEFAULT_LOG_LEVEL);

/// Starts COM2 at the default rate and routes `log` records to it.
///
/// Call once, early in boot. Calling again re-runs the (idempotent) setup
/// and reports that a logger is already installed. Without `serial-out` no
/// logger is installed, so `log` macros stay filtered out entirely.
///
/// # Returns
///
/// The error from `log::set_logger` if a logger was installed before.
pub fn init() -> Result<(), SetLoggerError> {
    if !ENABLED {
        return Ok(());
    }
    LOGGER.lock().setup();
    LOGGER.init()
}

/// Locks the platform sink. Logging while the guard is held deadlocks.
pub fn debug_port() -> MutexGuard<'static, DebugPort> {
    LOGGER.lock()
}
