//! Button byte decoding shared by both wire dialects.
//!
//! Layout of the button code once the dialect offset is removed:
//!
//! ```text
//! bit 6   wheel      low bits 00 = up, 01 = down
//! bit 5   motion     only meaningful with low bits 11
//! bit 4   ctrl
//! bit 3   alt
//! bit 2   shift
//! bit 0-1 button     00 left, 01 middle, 10 right, 11 release/motion
//! ```

use crate::terminal::{MouseEvent, MouseEventType};
use std::fmt;

/// Fixed offset X10 adds to the button byte and both coordinates.
pub const X10_BYTE_OFFSET: i32 = 32;

const BIT_SHIFT: i32 = 0b0000_0100;
const BIT_ALT: i32 = 0b0000_1000;
const BIT_CTRL: i32 = 0b0001_0000;
const BIT_MOTION: i32 = 0b0010_0000;
const BIT_WHEEL: i32 = 0b0100_0000;

const BITS_MASK: i32 = 0b0000_0011;

const BITS_LEFT: i32 = 0b0000_0000;
const BITS_MIDDLE: i32 = 0b0000_0001;
const BITS_RIGHT: i32 = 0b0000_0010;

const BITS_WHEEL_UP: i32 = 0b0000_0000;
const BITS_WHEEL_DOWN: i32 = 0b0000_0001;

/// Mouse reporting wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `ESC [ < Cb ; Cx ; Cy (M|m)`, decimal fields.
    Sgr,
    /// `ESC [ M Cb Cx Cy`, raw bytes offset by 32.
    X10,
}

impl Dialect {
    /// Offset the dialect adds to raw button and coordinate values.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Sgr => 0,
            Self::X10 => X10_BYTE_OFFSET,
        }
    }

    /// Escape prefix that starts every report in this dialect.
    #[must_use]
    pub const fn prefix(self) -> &'static [u8] {
        match self {
            Self::Sgr => b"\x1b[<",
            Self::X10 => b"\x1b[M",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sgr => f.write_str("SGR"),
            Self::X10 => f.write_str("X10"),
        }
    }
}

/// Decode a button code into event type and modifiers.
///
/// Position and `release` are left at their defaults; the dialect decoders
/// fill them in. Click and drag are not told apart: a motion report with a
/// button held decodes as that button.
#[must_use]
pub fn decode_button(code: i32, dialect: Dialect) -> MouseEvent {
    let e = code.wrapping_sub(dialect.offset());

    let kind = if e & BIT_WHEEL != 0 {
        match e & BITS_MASK {
            BITS_WHEEL_UP => MouseEventType::WheelUp,
            BITS_WHEEL_DOWN => MouseEventType::WheelDown,
            _ => MouseEventType::Unknown,
        }
    } else {
        match e & BITS_MASK {
            BITS_LEFT => MouseEventType::Left,
            BITS_MIDDLE => MouseEventType::Middle,
            BITS_RIGHT => MouseEventType::Right,
            // BITS_RELEASE
            _ if e & BIT_MOTION != 0 => MouseEventType::Motion,
            _ => MouseEventType::Release,
        }
    };

    MouseEvent {
        kind,
        shift: e & BIT_SHIFT != 0,
        alt: e & BIT_ALT != 0,
        ctrl: e & BIT_CTRL != 0,
        ..MouseEvent::default()
    }
}
