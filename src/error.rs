//! Error types for termouse.

use crate::input::Dialect;
use std::fmt;
use std::io;

/// Result type alias for termouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a buffer cannot be decoded into mouse events.
///
/// None of these are fatal. Callers reading from a terminal should drop the
/// offending chunk and keep reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input buffer is empty.
    EmptyInput,
    /// Buffer contains neither the SGR nor the X10 prefix.
    UnrecognizedProtocol,
    /// A prefix was found but its payload has the wrong shape.
    MalformedSequence {
        /// Dialect the fragment was decoded as.
        dialect: Dialect,
        /// The offending fragment, prefix stripped.
        fragment: Vec<u8>,
    },
    /// A coordinate normalized below zero and the decoder was told to reject it.
    NegativeCoordinate {
        /// Normalized column.
        x: i32,
        /// Normalized row.
        y: i32,
    },
}

impl DecodeError {
    pub(crate) fn malformed(dialect: Dialect, fragment: &[u8]) -> Self {
        Self::MalformedSequence {
            dialect,
            fragment: fragment.to_vec(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty buffer"),
            Self::UnrecognizedProtocol => write!(f, "not a mouse event"),
            Self::MalformedSequence { dialect, fragment } => {
                write!(f, "malformed {dialect} mouse sequence: {fragment:?}")
            }
            Self::NegativeCoordinate { x, y } => {
                write!(f, "mouse position ({x}, {y}) is off screen")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error type for termouse operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the terminal.
    Io(io::Error),
    /// A chunk could not be decoded.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}
