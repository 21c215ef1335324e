//! `Dbg` resolves to the sink picked by the `serial-out` feature.

use debug_print::config::ENABLED;
use debug_print::{CaptureTransport, DebugOutput, Dbg};

#[test]
fn enabled_flag_tracks_feature() {
    assert_eq!(ENABLED, cfg!(feature = "serial-out"));
}

#[test]
fn dbg_alias_names_selected_sink() {
    let name = core::any::type_name::<Dbg<CaptureTransport<8>>>();
    if ENABLED {
        assert!(name.contains("DebugSink"), "{name}");
    } else {
        assert!(name.contains("NullSink"), "{name}");
    }
}

#[test]
fn dbg_output_only_with_feature() {
    let mut port = CaptureTransport::<16>::new();
    {
        let mut sink = Dbg::new(&mut port);
        sink.setup();
        sink.println("hi");
    }
    if ENABLED {
        assert_eq!(port.as_str(), Some("hi\r\n"));
        assert_eq!(port.begin_count(), 1);
    } else {
        assert!(port.as_bytes().is_empty());
        assert_eq!(port.begin_count(), 0);
    }
}
