/*
 * Hardware Transports
 *
 * Drivers for the serial devices a sink can be pointed at.
 */

pub mod uart_16550;

pub use uart_16550::{COM1_BASE, COM2_BASE, SerialPort};
