//! Stroke state machine and its owned geometry.

use crate::draw::{Point, QuadSegment, StrokePath, StrokeStyle};

/// Default minimum displacement, in pixels, before a new segment is committed.
pub const DEFAULT_TOUCH_TOLERANCE: f64 = 8.0;

/// Current stroke mode.
///
/// A press always enters `Drawing`; a release always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// No contact held - waiting for a press
    Idle,
    /// A stroke is in progress
    Drawing,
}

/// What a single event did to the stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeOutcome {
    /// A new stroke began at the given point
    Started(Point),
    /// A curve piece was added to the path and inked
    Committed(QuadSegment),
    /// The stroke finished
    Ended,
    /// Nothing changed (below tolerance, or out-of-order event)
    Ignored,
}

impl StrokeOutcome {
    /// Whether the visible surface must be repainted after this event.
    pub fn requests_redraw(&self) -> bool {
        matches!(self, StrokeOutcome::Committed(_))
    }
}

/// Turns pointer events into smoothed, incrementally inked strokes.
///
/// Owns the active path, the latest raw sample, and the anchor the next
/// curve extends from. The ink cache is borrowed per event, never stored.
#[derive(Debug)]
pub struct StrokeInput {
    pub(super) state: StrokeState,
    pub(super) path: StrokePath,
    pub(super) sample: Point,
    pub(super) anchor: Point,
    pub(super) tolerance: f64,
    pub(super) style: StrokeStyle,
}

impl StrokeInput {
    /// Creates an idle state machine.
    ///
    /// # Arguments
    /// * `style` - Paint used when inking committed segments
    /// * `tolerance` - Minimum per-axis displacement before a segment is added
    pub fn new(style: StrokeStyle, tolerance: f64) -> Self {
        Self {
            state: StrokeState::Idle,
            path: StrokePath::new(),
            sample: Point::default(),
            anchor: Point::default(),
            tolerance: tolerance.max(0.0),
            style,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == StrokeState::Drawing
    }

    /// Geometry of the stroke in progress (empty while idle).
    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    /// Last committed point of the active stroke.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Most recent raw pointer position.
    pub fn sample(&self) -> Point {
        self.sample
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}
