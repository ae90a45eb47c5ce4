//! Legacy X10 mouse reports.
//!
//! ```text
//! ESC [ M Cb Cx Cy
//! ```
//!
//! Three raw bytes, each offset by 32 to stay clear of control characters.
//! Positions are one-indexed, so the usable range tops out at 223.
//!
//! <http://www.xfree86.org/current/ctlseqs.html#Mouse%20Tracking>

use crate::error::DecodeError;
use crate::input::button::{Dialect, X10_BYTE_OFFSET, decode_button};
use crate::input::decoder::fragments;
use crate::terminal::MouseEvent;

/// Decode every X10 report in `buf`, in order.
pub(crate) fn decode_x10(buf: &[u8]) -> Result<Vec<MouseEvent>, DecodeError> {
    fragments(buf, Dialect::X10.prefix())
        .filter(|fragment| !fragment.is_empty())
        .map(decode_fragment)
        .collect()
}

fn decode_fragment(fragment: &[u8]) -> Result<MouseEvent, DecodeError> {
    let &[cb, cx, cy] = fragment else {
        return Err(DecodeError::malformed(Dialect::X10, fragment));
    };

    let mut event = decode_button(i32::from(cb), Dialect::X10);

    // (1,1) is the upper left; normalize to (0,0).
    event.x = i32::from(cx) - X10_BYTE_OFFSET - 1;
    event.y = i32::from(cy) - X10_BYTE_OFFSET - 1;

    Ok(event)
}
