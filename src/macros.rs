/*
 * Output Macros
 *
 * `format!`-style front ends for a sink. The first argument is the sink (any
 * place expression, a lock guard works too); the rest is a format string and
 * its arguments, checked at compile time.
 */

/// Formatted output without a line ending.
///
/// ```ignore
/// dbg_printf!(sink, "With formatting! {:.1} {}", 0.1, 1);
/// ```
#[macro_export]
macro_rules! dbg_printf {
    ($sink:expr, $($arg:tt)*) => ({
        use $crate::DebugOutput as _;
        $sink.printf(format_args!($($arg)*));
    });
}

/// Formatted output followed by a line ending; with only a sink, just the ending.
#[macro_export]
macro_rules! dbg_println {
    ($sink:expr) => ({
        use $crate::DebugOutput as _;
        $sink.newline();
    });
    ($sink:expr, $($arg:tt)*) => ({
        use $crate::DebugOutput as _;
        $sink.printf(format_args!(
            "{}{}",
            format_args!($($arg)*),
            $crate::config::LINE_ENDING
        ));
    });
}

/// Reports a fatal error and halts until reset.
///
/// ```ignore
/// dbg_exit!(sink, "bad sensor id {}", id);
/// dbg_exit!(sink); // prints 'FATAL ERROR'
/// ```
#[macro_export]
macro_rules! dbg_exit {
    ($sink:expr) => ({
        use $crate::DebugOutput as _;
        $sink.exit()
    });
    ($sink:expr, $($arg:tt)*) => ({
        use $crate::DebugOutput as _;
        $sink.exit_fmt(format_args!($($arg)*))
    });
}
