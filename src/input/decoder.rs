//! Dialect detection and dispatch.
//!
//! A buffer is assumed to use a single dialect throughout. When both prefixes
//! are present SGR wins.

use crate::error::DecodeError;
use crate::input::button::Dialect;
use crate::input::options::DecoderOptions;
use crate::input::sgr::decode_sgr;
use crate::input::x10::decode_x10;
use crate::terminal::MouseEvent;

/// Decode a raw terminal buffer into mouse events using default options.
///
/// Events come back in the order they appear in the buffer. No state is kept
/// between calls.
///
/// # Errors
///
/// - [`DecodeError::EmptyInput`] for a zero-length buffer.
/// - [`DecodeError::UnrecognizedProtocol`] when no mouse prefix is present.
/// - [`DecodeError::MalformedSequence`] when any report has the wrong shape.
pub fn decode(buf: &[u8]) -> Result<Vec<MouseEvent>, DecodeError> {
    Decoder::default().decode(buf)
}

/// Which dialect `buf` would be decoded as, if any.
#[must_use]
pub fn detect_dialect(buf: &[u8]) -> Option<Dialect> {
    [Dialect::Sgr, Dialect::X10]
        .into_iter()
        .find(|dialect| find_subsequence(buf, dialect.prefix()).is_some())
}

/// Mouse report decoder with configurable leniency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    /// Create a decoder with the given options.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Get the decoder options.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decode a raw terminal buffer into mouse events.
    ///
    /// # Errors
    ///
    /// Same as [`decode`], plus [`DecodeError::NegativeCoordinate`] under
    /// [`CoordinatePolicy::Reject`](crate::input::CoordinatePolicy::Reject).
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<MouseEvent>, DecodeError> {
        if buf.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let mut events = match detect_dialect(buf) {
            Some(Dialect::Sgr) => decode_sgr(buf, self.options.numbers)?,
            Some(Dialect::X10) => decode_x10(buf)?,
            None => return Err(DecodeError::UnrecognizedProtocol),
        };

        for event in &mut events {
            let (x, y) = self
                .options
                .coordinates
                .apply(event.x, event.y)
                .ok_or(DecodeError::NegativeCoordinate {
                    x: event.x,
                    y: event.y,
                })?;
            event.x = x;
            event.y = y;
        }

        Ok(events)
    }
}

/// Split `buf` on every occurrence of `sep`.
///
/// Mirrors `[T]::split` for a multi-byte separator: leading, trailing and
/// adjacent separators produce empty fragments.
pub(crate) fn fragments<'a>(buf: &'a [u8], sep: &'a [u8]) -> Fragments<'a> {
    Fragments {
        rest: Some(buf),
        sep,
    }
}

pub(crate) struct Fragments<'a> {
    rest: Option<&'a [u8]>,
    sep: &'a [u8],
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match find_subsequence(rest, self.sep) {
            Some(pos) => {
                self.rest = Some(&rest[pos + self.sep.len()..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Find a subsequence in a slice.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::options::{CoordinatePolicy, NumberPolicy};
    use crate::terminal::MouseEventType;

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(b""), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn test_unrecognized_protocol() {
        assert_eq!(decode(b"hello"), Err(DecodeError::UnrecognizedProtocol));
        assert_eq!(decode(b"\x1b[A"), Err(DecodeError::UnrecognizedProtocol));
    }

    #[test]
    fn test_routes_sgr() {
        let events = decode(b"\x1b[<0;5;10M").unwrap();
        assert_eq!(events, vec![MouseEvent::new(4, 9, MouseEventType::Left)]);
    }

    #[test]
    fn test_routes_x10() {
        let events = decode(b"\x1b[M\x20\x21\x21").unwrap();
        assert_eq!(events, vec![MouseEvent::new(0, 0, MouseEventType::Left)]);
    }

    #[test]
    fn test_sgr_takes_precedence() {
        // Both prefixes present: the whole buffer is split as SGR, so the X10
        // bytes land inside an SGR fragment and make it malformed.
        let buf = b"\x1b[M\x20\x21\x21\x1b[<0;1;1M";
        assert_eq!(detect_dialect(buf), Some(Dialect::Sgr));
        assert!(matches!(
            decode(buf),
            Err(DecodeError::MalformedSequence {
                dialect: Dialect::Sgr,
                ..
            })
        ));
    }

    #[test]
    fn test_detect_dialect() {
        assert_eq!(detect_dialect(b"\x1b[<0;1;1M"), Some(Dialect::Sgr));
        assert_eq!(detect_dialect(b"\x1b[M   "), Some(Dialect::X10));
        assert_eq!(detect_dialect(b"\x1b["), None);
        assert_eq!(detect_dialect(b""), None);
    }

    #[test]
    fn test_clamp_policy() {
        let decoder = Decoder::new(
            DecoderOptions::default().with_coordinates(CoordinatePolicy::Clamp),
        );
        let events = decoder.decode(&[0x1b, b'[', b'M', 32, 10, 40]).unwrap();
        assert_eq!((events[0].x, events[0].y), (0, 7));
    }

    #[test]
    fn test_reject_policy() {
        let decoder = Decoder::new(
            DecoderOptions::default().with_coordinates(CoordinatePolicy::Reject),
        );
        assert_eq!(
            decoder.decode(b"\x1b[<0;0;3M"),
            Err(DecodeError::NegativeCoordinate { x: -1, y: 2 })
        );
        assert!(decoder.decode(b"\x1b[<0;1;3M").is_ok());
    }

    #[test]
    fn test_strict_numbers_through_decoder() {
        let decoder = Decoder::new(DecoderOptions::default().with_numbers(NumberPolicy::Strict));
        assert!(decoder.decode(b"\x1b[<0;1x;3M").is_err());
        assert_eq!(decoder.options().numbers, NumberPolicy::Strict);
    }

    #[test]
    fn test_fragments_like_split() {
        let parts: Vec<&[u8]> = fragments(b"--a--b----", b"--").collect();
        let expected: [&[u8]; 5] = [b"", b"a", b"b", b"", b""];
        assert_eq!(parts, expected);

        let parts: Vec<&[u8]> = fragments(b"abc", b"--").collect();
        let expected: [&[u8]; 1] = [b"abc"];
        assert_eq!(parts, expected);

        let parts: Vec<&[u8]> = fragments(b"", b"--").collect();
        let expected: [&[u8]; 1] = [b""];
        assert_eq!(parts, expected);
    }
}
