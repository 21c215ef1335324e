/*
 * Debug Print
 *
 * Serial debug output for bare-metal firmware: raw, line and formatted text,
 * hex and decimal byte dumps, and a fatal-error halt.
 *
 * Usage:
 *     let mut dbg = Dbg::new(SerialPort::com1());
 *     dbg.setup();
 *
 *     dbg.print("Print w/o newline");
 *     dbg.println("Print w/ newline");
 *     dbg_printf!(dbg, "With formatting! {} {}", 0.1, 1);
 *
 *     // on fatal error
 *     dbg_exit!(dbg, "something bad happened: {} {}", 1, 2);
 *
 * Build without the `serial-out` feature to turn `Dbg` into `NullSink`:
 * output calls compile to nothing, the exits still halt.
 */

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod capture;
pub mod config;
#[cfg(target_arch = "x86_64")]
pub mod drivers;
pub mod halt;
#[cfg(target_arch = "x86_64")]
pub mod io;
pub mod logger;
pub mod null;
#[cfg(target_arch = "x86_64")]
pub mod platform;
pub mod sink;
pub mod transport;

pub use capture::CaptureTransport;
pub use halt::halt;
pub use logger::SinkLogger;
pub use null::NullSink;
pub use sink::{DebugOutput, DebugSink, SinkState};
pub use transport::Transport;

/// The sink selected by the `serial-out` feature.
#[cfg(feature = "serial-out")]
pub type Dbg<T> = DebugSink<T>;

/// The sink selected by the `serial-out` feature.
#[cfg(not(feature = "serial-out"))]
pub type Dbg<T> = NullSink<T>;
