//! Generic input event types for cross-backend compatibility.

use crate::draw::Point;

/// A single pointer or touch contact event, already mapped to surface coordinates.
///
/// Backends translate their native button/touch callbacks into these three
/// variants; the stroke state machine dispatches on them in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Contact started (primary button or finger down)
    Press(Point),
    /// Contact moved while held
    Move(Point),
    /// Contact ended (button or finger up)
    Release(Point),
}

/// Generic key representation for cross-backend compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key
    Char(char),
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (draws)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
