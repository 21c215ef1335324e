/*
 * Port I/O (PIO) Registers
 *
 * Typed access to device registers. `Pio<u8>` reaches x86 I/O ports through
 * the IN/OUT instructions wrapped by the `x86_64` crate. Drivers are written
 * against `Io` so their register sequences can be checked without hardware.
 */

use core::marker::PhantomData;

use x86_64::instructions::port::Port;

/// A device register.
pub trait Io {
    /// The value type used for register access.
    type Value: Copy + PartialEq + core::ops::BitAnd<Output = Self::Value>;

    /// Reads the register.
    fn read(&self) -> Self::Value;

    /// Writes the register.
    fn write(&mut self, value: Self::Value);

    /// Returns `true` if every bit of `flags` is set.
    fn readf(&self, flags: Self::Value) -> bool {
        (self.read() & flags) == flags
    }
}

/// Wrapper for a register that must never be written.
pub struct ReadOnly<I> {
    inner: I,
}

impl<I> ReadOnly<I> {
    pub const fn new(inner: I) -> ReadOnly<I> {
        ReadOnly { inner }
    }
}

impl<I: Io> ReadOnly<I> {
    /// Returns `true` if every bit of `flags` is set.
    #[inline(always)]
    pub fn readf(&self, flags: I::Value) -> bool {
        self.inner.readf(flags)
    }
}

/// A register at a fixed I/O port number.
#[derive(Copy, Clone, Debug)]
pub struct Pio<T> {
    port: u16,
    value: PhantomData<T>,
}

impl<T> Pio<T> {
    pub const fn new(port: u16) -> Self {
        Pio::<T> {
            port,
            value: PhantomData,
        }
    }

    /// Port number this register is mapped at.
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl Io for Pio<u8> {
    type Value = u8;

    #[inline(always)]
    fn read(&self) -> u8 {
        // SAFETY: the port number was chosen by whoever constructed the
        // device; reading a UART register has no memory side effects.
        unsafe { Port::<u8>::new(self.port).read() }
    }

    #[inline(always)]
    fn write(&mut self, value: u8) {
        // SAFETY: see `read`.
        unsafe { Port::<u8>::new(self.port).write(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_keep_their_port() {
        let reg = ReadOnly::new(Pio::<u8>::new(0x2FD));
        assert_eq!(reg.inner.port(), 0x2FD);
        assert_eq!(Pio::<u8>::new(0x3F8).port(), 0x3F8);
    }
}
