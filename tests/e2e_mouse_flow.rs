//! E2E tests for mouse input flow.
//!
//! Raw terminal bytes → decoded events → verification, for both dialects,
//! including the reader loop and mouse mode switching.

use insta::assert_snapshot;
use std::io::Cursor;
use std::sync::{Arc, Mutex, Once};
use termouse::{
    DecodeError, Decoder, DecoderOptions, Dialect, InputReader, LogLevel, MouseEvent,
    MouseEventType, MouseMode, ReaderOptions, Terminal, decode, set_log_callback,
};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn describe(events: &[MouseEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{e} @ ({}, {})", e.x, e.y))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_e2e_sgr_left_press() {
    let events = decode(b"\x1b[<0;5;10M").expect("Should decode");
    assert_eq!(events.len(), 1);
    let e = events[0];
    assert_eq!((e.x, e.y), (4, 9));
    assert_eq!(e.kind, MouseEventType::Left);
    assert!(!e.release);
}

#[test]
fn test_e2e_sgr_wheel_up() {
    let events = decode(b"\x1b[<64;1;1M").expect("Should decode");
    assert_eq!((events[0].x, events[0].y), (0, 0));
    assert_eq!(events[0].kind, MouseEventType::WheelUp);
}

#[test]
fn test_e2e_x10_left_at_origin() {
    let events = decode(&[0x1b, b'[', b'M', 32, 33, 33]).expect("Should decode");
    assert_eq!(events, vec![MouseEvent::new(0, 0, MouseEventType::Left)]);
}

#[test]
fn test_e2e_two_sgr_reports_in_order() {
    let events = decode(b"\x1b[<0;5;10M\x1b[<0;5;10m").expect("Should decode");
    assert_snapshot!(describe(&events), @r"
    left @ (4, 9)
    left release @ (4, 9)
    ");
}

#[test]
fn test_e2e_empty_buffer() {
    assert_eq!(decode(b""), Err(DecodeError::EmptyInput));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_e2e_modified_drag_and_wheel() {
    // ctrl+shift drag, alt wheel down, motion with no button, ambiguous release
    let events = decode(b"\x1b[<52;10;3M\x1b[<73;10;4M\x1b[<35;11;4M\x1b[<3;11;4m")
        .expect("Should decode");
    assert_snapshot!(describe(&events), @r"
    ctrl+shift+left @ (9, 2)
    alt+wheel down @ (9, 3)
    motion @ (10, 3)
    release release @ (10, 3)
    ");
}

#[test]
fn test_e2e_x10_release_has_no_flag() {
    let events = decode(&[0x1b, b'[', b'M', 35, 40, 41]).expect("Should decode");
    assert_snapshot!(describe(&events), @"release @ (7, 8)");
    assert!(!events[0].release);
}

// ============================================================================
// Mode Switching + Decoding
// ============================================================================

#[test]
fn test_e2e_mode_selects_dialect() {
    setup_test_logging();

    let mut output = Vec::new();
    {
        let mut terminal = Terminal::new(&mut output);
        terminal
            .apply_mouse_mode(MouseMode::ALL_MOTION | MouseMode::EXTENDED)
            .expect("Should write");
        assert_eq!(terminal.mouse_mode().dialect(), Dialect::Sgr);
    }
    let written = String::from_utf8_lossy(&output);
    assert_snapshot!(written.replace('\x1b', "ESC"), @"ESC[?1003hESC[?1006hESC[?1006lESC[?1003l");

    // Replies in the selected dialect decode as that dialect.
    let reply = b"\x1b[<35;100;40M";
    assert_eq!(termouse::detect_dialect(reply), Some(Dialect::Sgr));
    let events = decode(reply).expect("Should decode");
    assert!(events[0].is_motion());
}

// ============================================================================
// Reader Loop
// ============================================================================

#[test]
fn test_e2e_reader_drops_bad_chunk_and_logs() {
    setup_test_logging();

    let warnings = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&warnings);
    set_log_callback(move |level, msg| {
        if level == LogLevel::Warn {
            sink.lock().unwrap().push(msg.to_string());
        }
    });

    // Every report is exactly one 10-byte chunk; the middle one has two fields.
    let stream = b"\x1b[<0;1;10M\x1b[<0;1Mxxx\x1b[<2;3;40m".to_vec();
    let mut reader = InputReader::with_options(
        Cursor::new(stream),
        Decoder::default(),
        ReaderOptions { chunk_size: 10 },
    );

    let mut events = Vec::new();
    while let Some(batch) = reader.read_events().expect("No I/O errors") {
        events.extend(batch);
    }
    termouse::clear_log_callback();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, MouseEventType::Left);
    assert_eq!(events[1].kind, MouseEventType::Right);
    assert!(events[1].release);

    let warnings = warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("dropping 10-byte input chunk"));
}

#[test]
fn test_e2e_spawned_reader_with_clamping() {
    setup_test_logging();

    let decoder = Decoder::new(
        DecoderOptions::default().with_coordinates(termouse::CoordinatePolicy::Clamp),
    );
    let stream = vec![0x1b, b'[', b'M', 32, 20, 20];
    let reader = InputReader::with_options(Cursor::new(stream), decoder, ReaderOptions::default());

    let (rx, handle) = reader.spawn().expect("Should spawn");
    let events: Vec<MouseEvent> = rx.iter().collect();
    handle.join().expect("Thread should not panic").expect("No I/O errors");

    assert_eq!(events, vec![MouseEvent::new(0, 0, MouseEventType::Left)]);
}
