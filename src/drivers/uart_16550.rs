/*
 * 16550 UART Transport
 *
 * The platform default transport on PC-compatible hardware. Registers are
 * reached through any `Io` implementation, `Pio<u8>` on real hardware.
 *
 * Why this is important:
 * - COM ports are usable before any other output device
 * - Emulators and debuggers capture them without extra drivers
 * - Only the transmit side is driven; the line is output-only here
 */

use bitflags::bitflags;

use crate::io::{Io, Pio, ReadOnly};
use crate::transport::Transport;

/// Base I/O port of COM1.
pub const COM1_BASE: u16 = 0x3F8;
/// Base I/O port of COM2.
pub const COM2_BASE: u16 = 0x2F8;

/// Input clock divided by 16; a divisor of 1 gives this rate.
pub const UART_CLOCK: u32 = 115_200;

bitflags! {
    /// Line status flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct LineStsFlags: u8 {
        // 0 to 4 are receive and error bits, unused on an output-only line
        const OUTPUT_EMPTY = 1 << 5;
        // 6 and 7 unknown
    }
}

bitflags! {
    /// Line control flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct LineCtrlFlags: u8 {
        const DATA_8 = 0b11;
        const DLAB = 1 << 7;
    }
}

/// Divisor latch value for `baud`, clamped to what the latch can hold.
///
/// # Arguments
///
/// * `baud` - Requested line rate; `0` is treated as `1`.
///
/// # Returns
///
/// `UART_CLOCK / baud`, at least 1 and at most `u16::MAX`.
pub fn divisor_for(baud: u32) -> u16 {
    let divisor = UART_CLOCK / baud.max(1);
    divisor.clamp(1, u32::from(u16::MAX)) as u16
}

/// 16550-compatible serial port.
pub struct SerialPort<T> {
    data: T,       // Data register, divisor low byte while DLAB is set
    int_en: T,     // Interrupt enable, divisor high byte while DLAB is set
    fifo_ctrl: T,  // FIFO control
    line_ctrl: T,  // Line control
    modem_ctrl: T, // Modem control
    line_sts: ReadOnly<T>,
}

impl SerialPort<Pio<u8>> {
    /// Creates a port at `base`. Nothing is touched until `begin`.
    ///
    /// # Arguments
    ///
    /// * `base` - The base I/O port of the UART, e.g. `COM1_BASE`.
    pub const fn new(base: u16) -> SerialPort<Pio<u8>> {
        SerialPort {
            data: Pio::new(base),
            int_en: Pio::new(base + 1),
            fifo_ctrl: Pio::new(base + 2),
            line_ctrl: Pio::new(base + 3),
            modem_ctrl: Pio::new(base + 4),
            line_sts: ReadOnly::new(Pio::new(base + 5)),
        }
    }

    pub const fn com1() -> SerialPort<Pio<u8>> {
        SerialPort::new(COM1_BASE)
    }

    pub const fn com2() -> SerialPort<Pio<u8>> {
        SerialPort::new(COM2_BASE)
    }
}

impl<T: Io<Value = u8>> SerialPort<T> {
    /// Builds a port from any register type; `reg` maps a port offset to its register.
    pub fn with_registers(base: u16, mut reg: impl FnMut(u16) -> T) -> SerialPort<T> {
        SerialPort {
            data: reg(base),
            int_en: reg(base + 1),
            fifo_ctrl: reg(base + 2),
            line_ctrl: reg(base + 3),
            modem_ctrl: reg(base + 4),
            line_sts: ReadOnly::new(reg(base + 5)),
        }
    }

    /// Programs the line for 8N1 at `baud` with FIFOs on and interrupts off.
    pub fn init(&mut self, baud: u32) {
        let [lo, hi] = divisor_for(baud).to_le_bytes();

        self.int_en.write(0x00); // interrupts stay off, nothing is received
        self.line_ctrl.write(LineCtrlFlags::DLAB.bits());
        self.data.write(lo);
        self.int_en.write(hi);
        self.line_ctrl.write(LineCtrlFlags::DATA_8.bits());
        self.fifo_ctrl.write(0xC7);
        self.modem_ctrl.write(0x0B);
    }

    /// Sends one byte once the transmit holding register is empty.
    ///
    /// # Arguments
    ///
    /// * `data` - The byte to send, written as-is.
    pub fn send(&mut self, data: u8) {
        while !self.line_sts.readf(LineStsFlags::OUTPUT_EMPTY.bits()) {
            core::hint::spin_loop();
        }
        self.data.write(data);
    }
}

impl<T: Io<Value = u8>> Transport for SerialPort<T> {
    fn begin(&mut self, baud: u32) {
        self.init(baud);
    }

    fn write_byte(&mut self, byte: u8) {
        self.send(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::vec::Vec;

    /// Register backed by memory; writes are logged as (port, value).
    /// Reads return 0 while `busy_reads` counts down, then `status`.
    struct MemReg<'a> {
        port: u16,
        status: u8,
        busy_reads: &'a Cell<u32>,
        log: &'a RefCell<Vec<(u16, u8)>>,
    }

    impl Io for MemReg<'_> {
        type Value = u8;

        fn read(&self) -> u8 {
            match self.busy_reads.get() {
                0 => self.status,
                left => {
                    self.busy_reads.set(left - 1);
                    0
                }
            }
        }

        fn write(&mut self, value: u8) {
            self.log.borrow_mut().push((self.port, value));
        }
    }

    fn fake_port<'a>(
        status: u8,
        busy_reads: &'a Cell<u32>,
        log: &'a RefCell<Vec<(u16, u8)>>,
    ) -> SerialPort<MemReg<'a>> {
        SerialPort::with_registers(0x100, |port| MemReg {
            port,
            status,
            busy_reads,
            log,
        })
    }

    #[test]
    fn divisor_follows_baud() {
        assert_eq!(divisor_for(115_200), 1);
        assert_eq!(divisor_for(57_600), 2);
        assert_eq!(divisor_for(9_600), 12);
        assert_eq!(divisor_for(1_000_000), 1);
        assert_eq!(divisor_for(0), u16::MAX);
        assert_eq!(divisor_for(1), u16::MAX);
    }

    #[test]
    fn begin_latches_divisor_then_frames_8n1() {
        let busy = Cell::new(0);
        let log = RefCell::new(Vec::new());
        let mut port = fake_port(LineStsFlags::OUTPUT_EMPTY.bits(), &busy, &log);

        port.begin(9_600);

        let writes = log.borrow();
        assert_eq!(writes[0], (0x101, 0x00));
        assert_eq!(writes[1], (0x103, 0x80));
        assert_eq!(writes[2], (0x100, 12));
        assert_eq!(writes[3], (0x101, 0));
        assert_eq!(writes[4], (0x103, 0x03));
        assert_eq!(writes.last(), Some(&(0x104, 0x0B)));
        assert_eq!(writes.len(), 7);
    }

    #[test]
    fn send_waits_for_output_empty() {
        let busy = Cell::new(3);
        let log = RefCell::new(Vec::new());
        let mut port = fake_port(LineStsFlags::OUTPUT_EMPTY.bits(), &busy, &log);

        port.send(b'z');

        assert_eq!(busy.get(), 0);
        assert_eq!(*log.borrow(), [(0x100, b'z')]);
    }

    #[test]
    fn bytes_go_to_data_register_untranslated() {
        let busy = Cell::new(0);
        let log = RefCell::new(Vec::new());
        let mut port = fake_port(LineStsFlags::OUTPUT_EMPTY.bits(), &busy, &log);

        port.write_bytes(b"a\n");

        assert_eq!(*log.borrow(), [(0x100, b'a'), (0x100, b'\n')]);
    }
}
