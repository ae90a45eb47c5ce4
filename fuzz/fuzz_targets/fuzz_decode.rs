//! Fuzz target for the mouse report decoder.
//!
//! Terminal input is untrusted: decoding arbitrary bytes must never panic,
//! under either number policy or any coordinate policy.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termouse::{CoordinatePolicy, DecodeError, Decoder, DecoderOptions, decode};

fuzz_target!(|data: &[u8]| {
    let lenient = decode(data);

    if data.is_empty() {
        assert_eq!(lenient, Err(DecodeError::EmptyInput));
    }

    // Strict parsing only ever rejects more.
    let strict = Decoder::new(DecoderOptions::strict()).decode(data);
    if let Ok(strict_events) = &strict {
        assert_eq!(lenient.as_ref().ok(), Some(strict_events));
    }

    let clamped = Decoder::new(DecoderOptions::default().with_coordinates(CoordinatePolicy::Clamp))
        .decode(data);
    if let Ok(events) = clamped {
        assert!(events.iter().all(|e| e.x >= 0 && e.y >= 0));
    }
});
