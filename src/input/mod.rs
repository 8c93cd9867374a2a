//! Input handling and the stroke state machine.
//!
//! This module translates backend pointer events into smoothed stroke
//! geometry, inking each committed segment into the canvas raster.

pub mod contact;
pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use contact::{Contact, ContactRouter};
pub use events::{Key, MouseButton, PointerEvent};
pub use state::{DEFAULT_TOUCH_TOLERANCE, StrokeInput, StrokeOutcome, StrokeState};
