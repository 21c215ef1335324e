/*
 * Debug Sink
 *
 * Formats diagnostic text and forwards it, byte by byte, to one serial
 * transport. This is the live half of the debug facility; `NullSink` is the
 * silent half and both implement `DebugOutput`.
 *
 * Calls are synchronous: each one returns once the transport has accepted
 * every byte, except the two exits, which never return.
 *
 * Why this is important:
 * - Firmware has no console; the serial line is the only view inside it
 * - Byte dumps make protocol buffers readable without a debugger
 * - A fatal error leaves a marker on the line before the device stops
 */

use core::fmt::{self, Write};

use crate::config::{DEFAULT_BAUD, FATAL_MARKER, FATAL_PREFIX, LINE_ENDING};
use crate::halt::halt;
use crate::transport::Transport;

/// Operations shared by the live and the silent sink.
///
/// Firmware code is written against this trait (or the `Dbg` alias) so the
/// `serial-out` feature can swap implementations without touching callers.
pub trait DebugOutput {
    /// Points output back at the default transport and starts it at
    /// `DEFAULT_BAUD`. Idempotent.
    fn setup(&mut self);

    /// Writes `text` verbatim.
    fn print(&mut self, text: &str);

    /// Writes `text` followed by `LINE_ENDING`.
    fn println(&mut self, text: &str);

    /// Writes `LINE_ENDING` only.
    fn newline(&mut self);

    /// Writes one raw byte.
    fn write(&mut self, byte: u8);

    /// Writes formatted output, see `dbg_printf!`.
    fn printf(&mut self, args: fmt::Arguments<'_>);

    /// Hex dump: every byte as `0xHH ` (two uppercase digits), then `LINE_ENDING`.
    fn writeln(&mut self, buf: &[u8]);

    /// Decimal dump: every byte as its unsigned value and a space, then `LINE_ENDING`.
    fn dwriteln(&mut self, buf: &[u8]);

    /// Writes `FATAL_MARKER` and halts until reset.
    fn exit(&mut self) -> !;

    /// Writes `FATAL_PREFIX` and the formatted message, then halts until reset.
    fn exit_fmt(&mut self, args: fmt::Arguments<'_>) -> !;
}

/// Lifecycle of a sink. The fatal halt is not a state: nothing observes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkState {
    /// Constructed, transport assumed usable but not started by us.
    Uninitialized,
    /// `setup` ran at least once.
    Configured,
}

/// Live debug output over a transport handle `T`.
///
/// `T` is usually a handle rather than the device itself: a `&mut` borrow,
/// a `&spin::Mutex` or a register-mapped port that is cheap to rebuild.
/// The handle given to `new` is the default transport; `setup` always
/// returns to it, `setup_with*` switch away from it.
#[derive(Debug)]
pub struct DebugSink<T: Transport> {
    default: T,
    swapped: Option<T>,
    state: SinkState,
    baud: u32,
}

impl<T: Transport> DebugSink<T> {
    /// Creates a sink over the default `transport`, not yet set up.
    ///
    /// # Arguments
    ///
    /// * `transport` - Handle used by `setup` and until a `setup_with*` call.
    pub const fn new(transport: T) -> Self {
        DebugSink {
            default: transport,
            swapped: None,
            state: SinkState::Uninitialized,
            baud: DEFAULT_BAUD,
        }
    }

    /// Switches to `transport` and starts it at `DEFAULT_BAUD`.
    pub fn setup_with(&mut self, transport: T) {
        self.setup_with_baud(transport, DEFAULT_BAUD);
    }

    /// Switches to `transport` and starts it at `baud`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Handle that receives all output from now on.
    /// * `baud` - Line rate passed to `Transport::begin`.
    ///
    /// A previously swapped-in transport is dropped without any cleanup; the
    /// default one is kept for `setup`.
    pub fn setup_with_baud(&mut self, transport: T, baud: u32) {
        self.swapped = Some(transport);
        self.configure(baud);
    }

    fn configure(&mut self, baud: u32) {
        self.active().begin(baud);
        self.baud = baud;
        self.state = SinkState::Configured;
    }

    fn active(&mut self) -> &mut T {
        match &mut self.swapped {
            Some(transport) => transport,
            None => &mut self.default,
        }
    }

    /// Whether `setup` has run.
    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Rate of the last setup, `DEFAULT_BAUD` before any.
    pub fn baud(&self) -> u32 {
        self.baud
    }

    /// Transport that currently receives output.
    pub fn transport(&self) -> &T {
        self.swapped.as_ref().unwrap_or(&self.default)
    }

    /// Mutable access to the transport that currently receives output.
    pub fn transport_mut(&mut self) -> &mut T {
        self.active()
    }

    /// Gives the active transport back.
    pub fn into_transport(self) -> T {
        self.swapped.unwrap_or(self.default)
    }
}

impl<T: Transport> DebugOutput for DebugSink<T> {
    /// Returns to the default transport and starts it at `DEFAULT_BAUD`.
    fn setup(&mut self) {
        self.swapped = None;
        self.configure(DEFAULT_BAUD);
    }

    fn print(&mut self, text: &str) {
        self.active().write_bytes(text.as_bytes());
    }

    fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    fn newline(&mut self) {
        self.print(LINE_ENDING);
    }

    fn write(&mut self, byte: u8) {
        self.active().write_byte(byte);
    }

    fn printf(&mut self, args: fmt::Arguments<'_>) {
        // write_str below never fails
        let _ = self.write_fmt(args);
    }

    fn writeln(&mut self, buf: &[u8]) {
        for byte in buf {
            self.printf(format_args!("0x{byte:02X} "));
        }
        self.newline();
    }

    fn dwriteln(&mut self, buf: &[u8]) {
        for byte in buf {
            self.printf(format_args!("{byte} "));
        }
        self.newline();
    }

    fn exit(&mut self) -> ! {
        self.print(FATAL_MARKER);
        halt()
    }

    fn exit_fmt(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.print(FATAL_PREFIX);
        self.printf(args);
        halt()
    }
}

impl<T: Transport> fmt::Write for DebugSink<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.active().write_bytes(s.as_bytes());
        Ok(())
    }
}
