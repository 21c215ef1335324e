/*
 * Port I/O
 *
 * Register access for devices on the x86 I/O port bus. Only the pieces the
 * UART transport needs live here.
 */

pub mod pio;

pub use pio::{Io, Pio, ReadOnly};
