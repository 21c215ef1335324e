//! The silent sink produces nothing, whatever it is given.

use debug_print::{CaptureTransport, DebugOutput, NullSink};

#[test]
fn every_output_call_is_silent() {
    let mut port = CaptureTransport::<64>::new();
    {
        let mut sink = NullSink::new(&mut port);
        sink.setup();
        sink.print("text");
        sink.println("line");
        sink.newline();
        sink.write(b'x');
        sink.printf(format_args!("{} {:.3}", 1, 2.5));
        sink.writeln(&[0xDE, 0xAD]);
        sink.dwriteln(&[1, 2, 3]);
        debug_print::dbg_printf!(sink, "{}", "macro");
        debug_print::dbg_println!(sink, "{}", "macro");
    }
    assert!(port.as_bytes().is_empty());
    assert_eq!(port.begin_count(), 0);
}

#[test]
fn null_sink_is_zero_sized_for_zero_sized_handles() {
    assert_eq!(core::mem::size_of::<NullSink<()>>(), 0);
}
