//! Terminal mouse mode control and mouse event types.

mod mouse;

pub use mouse::{MouseEvent, MouseEventType, MouseModifiers};

use crate::ansi::{mouse_disable_sequence, mouse_enable_sequence};
use crate::event::{LogLevel, emit_log};
use crate::input::Dialect;
use bitflags::bitflags;
use std::io::{self, Write};

bitflags! {
    /// Mouse reporting modes.
    ///
    /// `CELL_MOTION` and `ALL_MOTION` choose what gets reported. `EXTENDED`
    /// and `PIXELS` switch the terminal to the SGR dialect. The empty set
    /// means reporting is off.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseMode: u8 {
        /// Click, release, wheel, and drag motion.
        const CELL_MOTION = 0b0000_0001;
        /// Click, release, wheel, and motion with no button held.
        const ALL_MOTION = 0b0000_0010;
        /// SGR encoding, coordinates beyond 223.
        const EXTENDED = 0b0000_0100;
        /// SGR encoding with pixel coordinates.
        const PIXELS = 0b0000_1000;
    }
}

impl MouseMode {
    /// Dialect the terminal reports in under this mode.
    #[must_use]
    pub fn dialect(self) -> Dialect {
        if self.intersects(Self::EXTENDED | Self::PIXELS) {
            Dialect::Sgr
        } else {
            Dialect::X10
        }
    }
}

/// Terminal mouse state manager.
///
/// Holds the writer the terminal reads control sequences from and remembers
/// which mouse modes are active, so switching modes only emits the
/// difference. Reporting is switched off on drop.
pub struct Terminal<W: Write> {
    writer: W,
    mouse_mode: MouseMode,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal with the given writer. Mouse reporting is
    /// assumed to be off.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mouse_mode: MouseMode::empty(),
        }
    }

    /// Currently active mouse modes.
    #[must_use]
    pub fn mouse_mode(&self) -> MouseMode {
        self.mouse_mode
    }

    /// Switch to exactly `mode`.
    ///
    /// Modes being turned off are disabled first, then new modes are
    /// enabled. Nothing is written if `mode` is already active.
    pub fn apply_mouse_mode(&mut self, mode: MouseMode) -> io::Result<()> {
        let off = self.mouse_mode - mode;
        let on = mode - self.mouse_mode;
        if off.is_empty() && on.is_empty() {
            return Ok(());
        }

        self.writer
            .write_all(mouse_disable_sequence(off).as_bytes())?;
        self.writer
            .write_all(mouse_enable_sequence(on).as_bytes())?;
        self.writer.flush()?;

        emit_log(
            LogLevel::Debug,
            &format!("mouse mode {:?} -> {mode:?}", self.mouse_mode),
        );
        self.mouse_mode = mode;
        Ok(())
    }

    /// Disable mouse reporting.
    pub fn disable_mouse(&mut self) -> io::Result<()> {
        self.apply_mouse_mode(MouseMode::empty())
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.disable_mouse();
    }
}
