/*
 * Loopback Capture Transport
 *
 * Records everything written to it in a fixed-capacity buffer instead of
 * driving hardware. Host tests observe sink output through it, and firmware
 * can use it to check formatting before a real port is up.
 */

use heapless::Vec;

use crate::transport::Transport;

/// Transport that stores up to `N` bytes; anything past that is counted and dropped.
#[derive(Debug, Default)]
pub struct CaptureTransport<const N: usize> {
    bytes: Vec<u8, N>,
    dropped: usize,
    begin_count: usize,
    baud: Option<u32>,
}

impl<const N: usize> CaptureTransport<N> {
    /// Creates an empty capture that was never started.
    pub const fn new() -> Self {
        CaptureTransport {
            bytes: Vec::new(),
            dropped: 0,
            begin_count: 0,
            baud: None,
        }
    }

    /// Bytes captured so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Captured bytes as text, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Number of bytes that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// How many times `begin` was called.
    pub fn begin_count(&self) -> usize {
        self.begin_count
    }

    /// Rate passed to the last `begin`, `None` if never started.
    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    /// Forgets captured output, keeping the line configuration.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Transport for CaptureTransport<N> {
    fn begin(&mut self, baud: u32) {
        self.begin_count += 1;
        self.baud = Some(baud);
    }

    fn write_byte(&mut self, byte: u8) {
        if self.bytes.push(byte).is_err() {
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_counted_not_stored() {
        let mut port = CaptureTransport::<4>::new();
        port.write_bytes(b"abcdef");
        assert_eq!(port.as_bytes(), b"abcd");
        assert_eq!(port.dropped(), 2);

        port.clear();
        assert!(port.as_bytes().is_empty());
        assert_eq!(port.dropped(), 0);
    }

    #[test]
    fn begin_records_rate() {
        let mut port = CaptureTransport::<4>::new();
        assert_eq!(port.baud(), None);
        port.begin(57_600);
        port.begin(115_200);
        assert_eq!(port.begin_count(), 2);
        assert_eq!(port.baud(), Some(115_200));
        assert_eq!(port.as_str(), Some(""));
    }
}
