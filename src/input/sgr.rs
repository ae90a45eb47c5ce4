//! SGR (1006) extended mouse reports.
//!
//! ```text
//! ESC [ < Cb ; Cx ; Cy (M|m)
//! ```
//!
//! `Cb` is the button code, `Cx`/`Cy` the one-indexed position, all decimal.
//! `M` is a press, `m` a release. Several reports may arrive back to back.
//!
//! <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h3-Extended-coordinates>

use crate::error::DecodeError;
use crate::input::button::{Dialect, decode_button};
use crate::input::decoder::fragments;
use crate::input::options::NumberPolicy;
use crate::terminal::MouseEvent;

/// Decode every SGR report in `buf`, in order.
pub(crate) fn decode_sgr(
    buf: &[u8],
    numbers: NumberPolicy,
) -> Result<Vec<MouseEvent>, DecodeError> {
    fragments(buf, Dialect::Sgr.prefix())
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| decode_fragment(fragment, numbers))
        .collect()
}

fn decode_fragment(fragment: &[u8], numbers: NumberPolicy) -> Result<MouseEvent, DecodeError> {
    let malformed = || DecodeError::malformed(Dialect::Sgr, fragment);

    let fields: Vec<&[u8]> = fragment.split(|&b| b == b';').collect();
    let &[cb, cx, cy_term] = fields.as_slice() else {
        return Err(malformed());
    };

    let Some((&terminator, cy)) = cy_term.split_last() else {
        return Err(malformed());
    };
    if numbers == NumberPolicy::Strict && !matches!(terminator, b'M' | b'm') {
        return Err(malformed());
    }

    let number = |field: &[u8]| match (parse_decimal(field), numbers) {
        (Some(n), _) => Ok(n),
        (None, NumberPolicy::Lenient) => Ok(0),
        (None, NumberPolicy::Strict) => Err(malformed()),
    };

    let mut event = decode_button(number(cb)?, Dialect::Sgr);
    event.release = terminator == b'm';

    // (1,1) is the upper left; normalize to (0,0).
    event.x = number(cx)?.saturating_sub(1);
    event.y = number(cy)?.saturating_sub(1);

    Ok(event)
}

fn parse_decimal(field: &[u8]) -> Option<i32> {
    std::str::from_utf8(field).ok()?.parse().ok()
}
