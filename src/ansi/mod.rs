//! ANSI escape sequence generation.

pub mod sequences;

pub use sequences::*;

use crate::terminal::MouseMode;

/// Sequences to enable every mode in `mode`.
///
/// Tracking modes come before encoding modes.
#[must_use]
pub fn mouse_enable_sequence(mode: MouseMode) -> String {
    let mut out = String::new();
    for (flag, on, _) in mouse_mode_table() {
        if mode.contains(flag) {
            out.push_str(on);
        }
    }
    out
}

/// Sequences to disable every mode in `mode`, in reverse enable order.
#[must_use]
pub fn mouse_disable_sequence(mode: MouseMode) -> String {
    let mut out = String::new();
    for (flag, _, off) in mouse_mode_table().into_iter().rev() {
        if mode.contains(flag) {
            out.push_str(off);
        }
    }
    out
}

fn mouse_mode_table() -> [(MouseMode, &'static str, &'static str); 4] {
    [
        (MouseMode::CELL_MOTION, mouse::CELL_MOTION_ON, mouse::CELL_MOTION_OFF),
        (MouseMode::ALL_MOTION, mouse::ALL_MOTION_ON, mouse::ALL_MOTION_OFF),
        (MouseMode::EXTENDED, mouse::EXTENDED_ON, mouse::EXTENDED_OFF),
        (MouseMode::PIXELS, mouse::PIXELS_ON, mouse::PIXELS_OFF),
    ]
}
