//! Constant ANSI escape sequences.

/// Mouse reporting mode sequences (DEC private modes).
///
/// Tracking modes pick which events are reported; encoding modes pick the
/// wire dialect. Without an encoding mode the terminal answers in X10.
pub mod mouse {
    /// Report press, release, wheel, and motion while a button is held (1002).
    pub const CELL_MOTION_ON: &str = "\x1b[?1002h";
    /// Stop cell motion tracking.
    pub const CELL_MOTION_OFF: &str = "\x1b[?1002l";
    /// Report press, release, wheel, and all motion (1003).
    pub const ALL_MOTION_ON: &str = "\x1b[?1003h";
    /// Stop all motion tracking.
    pub const ALL_MOTION_OFF: &str = "\x1b[?1003l";
    /// SGR extended coordinates, lifts the 223 cell limit (1006).
    pub const EXTENDED_ON: &str = "\x1b[?1006h";
    /// Stop SGR extended coordinates.
    pub const EXTENDED_OFF: &str = "\x1b[?1006l";
    /// SGR coordinates in pixels instead of cells (1016).
    pub const PIXELS_ON: &str = "\x1b[?1016h";
    /// Stop SGR pixel coordinates.
    pub const PIXELS_OFF: &str = "\x1b[?1016l";
}
