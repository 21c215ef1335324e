/*
 * Build-time Configuration
 *
 * Constants shared by the live and the silent sink. Nothing here is read
 * at run time; the only switch is the `serial-out` cargo feature.
 */

/// Baud rate used by `setup()` and `setup_with()`.
pub const DEFAULT_BAUD: u32 = 115_200;

/// Terminator written by every operation that ends a line.
pub const LINE_ENDING: &str = "\r\n";

/// Marker written by `exit()`.
pub const FATAL_MARKER: &str = "FATAL ERROR";

/// Prefix written by `exit_fmt()` ahead of the caller's message.
pub const FATAL_PREFIX: &str = "FATAL ERROR: ";

/// `true` when the crate was built with debug output enabled.
pub const ENABLED: bool = cfg!(feature = "serial-out");

/// Filter used by the platform logger.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
