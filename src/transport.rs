/*
 * Output Transport
 *
 * A transport is the byte-oriented channel a sink forwards to, usually a
 * UART. Sinks never own the hardware: they hold a handle, and the impls at
 * the bottom of this file let a `&mut T` or a `&spin::Mutex<T>` act as that
 * handle for a transport owned somewhere else.
 */

use spin::Mutex;

/// Byte-oriented serial channel.
pub trait Transport {
    /// Starts (or restarts) the channel at `baud` symbols per second.
    ///
    /// Calling it again with the same rate leaves the channel in the same state.
    fn begin(&mut self, baud: u32);

    /// Sends one raw byte, blocking until the channel accepts it.
    fn write_byte(&mut self, byte: u8);

    /// Sends `bytes` in order.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self, baud: u32) {
        (**self).begin(baud);
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

/// Shared transport: the lock is taken per call, so several handles can point
/// at one port.
impl<T: Transport> Transport for &Mutex<T> {
    fn begin(&mut self, baud: u32) {
        self.lock().begin(baud);
    }

    fn write_byte(&mut self, byte: u8) {
        self.lock().write_byte(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.lock().write_bytes(bytes);
    }
}
