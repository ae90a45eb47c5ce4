//! `termouse` - terminal mouse report decoding
//!
//! Turns the raw bytes a terminal sends while mouse tracking is enabled into
//! normalized [`MouseEvent`]s, whichever of the X10 or SGR dialects the
//! terminal speaks, and switches the terminal's mouse modes.
//!
//! ```
//! use termouse::{MouseEventType, decode};
//!
//! let events = decode(b"\x1b[<0;5;10M").unwrap();
//! assert_eq!(events[0].kind, MouseEventType::Left);
//! assert_eq!((events[0].x, events[0].y), (4, 9));
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow MouseEvent in terminal::mouse
#![allow(clippy::struct_excessive_bools)] // Modifier flags are independent bools
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks

pub mod ansi;
pub mod error;
pub mod event;
pub mod input;
pub mod terminal;

// Re-export core types at crate root
pub use error::{DecodeError, Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};

// Re-export input types
pub use input::{
    CoordinatePolicy, Decoder, DecoderOptions, Dialect, InputReader, NumberPolicy, ReaderOptions,
    decode, detect_dialect,
};

// Re-export terminal types
pub use terminal::{MouseEvent, MouseEventType, MouseMode, MouseModifiers, Terminal};
