//! Mouse event types.

use bitflags::bitflags;
use std::fmt;

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseEventType {
    /// Button identity could not be determined.
    #[default]
    Unknown,
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle button (wheel click).
    Middle,
    /// Button release where the dialect cannot say which button (X10).
    Release,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
    /// Mouse moved.
    Motion,
}

impl MouseEventType {
    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
            Self::Release => "release",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
            Self::Motion => "motion",
        }
    }
}

impl fmt::Display for MouseEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Modifier keys held during a mouse event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// A decoded mouse event.
///
/// Coordinates are zero-indexed. They can be negative when the terminal
/// reports a value below the dialect's offset, see
/// [`CoordinatePolicy`](crate::input::CoordinatePolicy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// What happened.
    pub kind: MouseEventType,
    /// Shift key held.
    pub shift: bool,
    /// Alt key held.
    pub alt: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Button released. Only the SGR dialect ever sets this.
    pub release: bool,
}

impl MouseEvent {
    /// Create a new mouse event with no modifiers.
    #[must_use]
    pub fn new(x: i32, y: i32, kind: MouseEventType) -> Self {
        Self {
            x,
            y,
            kind,
            ..Self::default()
        }
    }

    /// Set modifier keys.
    #[must_use]
    pub fn with_modifiers(mut self, shift: bool, alt: bool, ctrl: bool) -> Self {
        self.shift = shift;
        self.alt = alt;
        self.ctrl = ctrl;
        self
    }

    /// Mark the event as a release.
    #[must_use]
    pub fn with_release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    /// Modifier keys as a flag set.
    #[must_use]
    pub fn modifiers(&self) -> MouseModifiers {
        let mut mods = MouseModifiers::empty();
        mods.set(MouseModifiers::SHIFT, self.shift);
        mods.set(MouseModifiers::ALT, self.alt);
        mods.set(MouseModifiers::CTRL, self.ctrl);
        mods
    }

    /// Check if this is a scroll wheel event.
    #[must_use]
    pub fn is_wheel(&self) -> bool {
        matches!(
            self.kind,
            MouseEventType::WheelUp | MouseEventType::WheelDown
        )
    }

    /// Check if this is a motion event.
    #[must_use]
    pub fn is_motion(&self) -> bool {
        self.kind == MouseEventType::Motion
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        if self.shift {
            f.write_str("shift+")?;
        }
        f.write_str(self.kind.name())?;
        if self.release {
            f.write_str(" release")?;
        }
        Ok(())
    }
}
