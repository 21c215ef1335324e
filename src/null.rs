/*
 * Null Sink
 *
 * Stand-in used when the crate is built without `serial-out`. Every output
 * call is an empty inlined body and disappears after optimisation. The exits
 * still halt: a fatal error stays fatal with diagnostics off.
 */

use core::fmt;

use crate::config::DEFAULT_BAUD;
use crate::halt::halt;
use crate::sink::{DebugOutput, SinkState};

/// Debug output that discards everything.
///
/// Keeps transport handles the same way `DebugSink` does, so code written
/// against `Dbg` compiles either way, but never calls into them.
#[derive(Debug)]
pub struct NullSink<T> {
    default: T,
    swapped: Option<T>,
}

impl<T> NullSink<T> {
    #[inline(always)]
    pub const fn new(transport: T) -> Self {
        NullSink {
            default: transport,
            swapped: None,
        }
    }

    /// Swaps the handle without touching the device.
    #[inline(always)]
    pub fn setup_with(&mut self, transport: T) {
        self.swapped = Some(transport);
    }

    #[inline(always)]
    pub fn setup_with_baud(&mut self, transport: T, _baud: u32) {
        self.swapped = Some(transport);
    }

    /// Always `Uninitialized`: nothing is ever started.
    #[inline(always)]
    pub fn state(&self) -> SinkState {
        SinkState::Uninitialized
    }

    /// Always `DEFAULT_BAUD`.
    #[inline(always)]
    pub fn baud(&self) -> u32 {
        DEFAULT_BAUD
    }

    pub fn transport(&self) -> &T {
        self.swapped.as_ref().unwrap_or(&self.default)
    }

    pub fn transport_mut(&mut self) -> &mut T {
        match &mut self.swapped {
            Some(transport) => transport,
            None => &mut self.default,
        }
    }

    pub fn into_transport(self) -> T {
        self.swapped.unwrap_or(self.default)
    }
}

impl<T> DebugOutput for NullSink<T> {
    /// Drops a swapped handle; the device is left alone.
    #[inline(always)]
    fn setup(&mut self) {
        self.swapped = None;
    }

    #[inline(always)]
    fn print(&mut self, _text: &str) {}

    #[inline(always)]
    fn println(&mut self, _text: &str) {}

    #[inline(always)]
    fn newline(&mut self) {}

    #[inline(always)]
    fn write(&mut self, _byte: u8) {}

    #[inline(always)]
    fn printf(&mut self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    fn writeln(&mut self, _buf: &[u8]) {}

    #[inline(always)]
    fn dwriteln(&mut self, _buf: &[u8]) {}

    fn exit(&mut self) -> ! {
        halt()
    }

    fn exit_fmt(&mut self, _args: fmt::Arguments<'_>) -> ! {
        halt()
    }
}

impl<T> fmt::Write for NullSink<T> {
    #[inline(always)]
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureTransport;
    use crate::transport::Transport;

    #[test]
    fn setup_never_starts_the_transport() {
        let mut sink = NullSink::new(CaptureTransport::<8>::new());
        sink.setup();
        sink.setup_with_baud(CaptureTransport::new(), 9_600);
        assert_eq!(sink.transport().begin_count(), 0);
        assert_eq!(sink.transport().baud(), None);
        assert_eq!(sink.state(), SinkState::Uninitialized);
        assert_eq!(sink.baud(), DEFAULT_BAUD);
    }

    #[test]
    fn handles_follow_setup_like_the_live_sink() {
        let mut sink = NullSink::new(CaptureTransport::<8>::new());
        sink.transport_mut().write_byte(b'd');
        sink.setup_with(CaptureTransport::new());
        assert!(sink.transport().as_bytes().is_empty());

        sink.setup();
        assert_eq!(sink.into_transport().as_bytes(), b"d");
    }

    #[test]
    fn borrowed_transport_stays_untouched() {
        let mut port = CaptureTransport::<8>::new();
        port.write_byte(b'x');
        {
            let mut sink = NullSink::new(&mut port);
            sink.println("hidden");
            sink.writeln(&[1, 2, 3]);
        }
        assert_eq!(port.as_bytes(), b"x");
    }
}
