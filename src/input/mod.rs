//! Mouse report decoding.
//!
//! Terminals report mouse activity in one of two dialects, chosen by the
//! mouse mode the application enabled:
//! - SGR (1006): decimal fields, press and release told apart
//! - Legacy X10: three raw bytes offset by 32, release is ambiguous
//!
//! [`decode`] picks the dialect from the buffer and returns every event in it.

mod button;
mod decoder;
mod options;
mod reader;
mod sgr;
mod x10;

pub use button::{Dialect, X10_BYTE_OFFSET, decode_button};
pub use decoder::{Decoder, decode, detect_dialect};
pub use options::{CoordinatePolicy, DEFAULT_CHUNK_SIZE, DecoderOptions, NumberPolicy, ReaderOptions};
pub use reader::InputReader;

// Re-export mouse types from terminal module (they're re-exported there)
pub use crate::terminal::{MouseEvent, MouseEventType, MouseModifiers};
