//! Geometry for the stroke currently being drawn.

/// A position on the drawing surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// One element of a [`StrokePath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Lifts the pen and places it at a point without drawing.
    MoveTo(Point),
    /// Quadratic Bézier from the current point through `control` to `end`.
    QuadTo { control: Point, end: Point },
}

impl PathSegment {
    /// Where the pen rests after this segment.
    pub fn end_point(&self) -> Point {
        match *self {
            PathSegment::MoveTo(point) => point,
            PathSegment::QuadTo { end, .. } => end,
        }
    }
}

/// A fully resolved curve piece, including the point it starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadSegment {
    /// Appends this curve to the context's current path.
    ///
    /// Cairo only has cubic curves; a quadratic is raised to the equivalent cubic.
    pub fn trace(&self, ctx: &cairo::Context) {
        let c1 = Point {
            x: self.start.x + 2.0 / 3.0 * (self.control.x - self.start.x),
            y: self.start.y + 2.0 / 3.0 * (self.control.y - self.start.y),
        };
        let c2 = Point {
            x: self.end.x + 2.0 / 3.0 * (self.control.x - self.end.x),
            y: self.end.y + 2.0 / 3.0 * (self.control.y - self.end.y),
        };
        ctx.move_to(self.start.x, self.start.y);
        ctx.curve_to(c1.x, c1.y, c2.x, c2.y, self.end.x, self.end.y);
    }
}

/// Mutable path for the active stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    segments: Vec<PathSegment>,
}

impl StrokePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every segment.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Starts a new sub-path at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    /// Extends the path with a quadratic curve and returns the resolved piece.
    ///
    /// An empty path implicitly starts at the control point.
    pub fn quad_to(&mut self, control: Point, end: Point) -> QuadSegment {
        let start = self.current_point().unwrap_or(control);
        if self.is_empty() {
            self.move_to(start);
        }
        self.segments.push(PathSegment::QuadTo { control, end });
        QuadSegment {
            start,
            control,
            end,
        }
    }

    /// Position of the pen after the last segment.
    pub fn current_point(&self) -> Option<Point> {
        self.segments.last().map(PathSegment::end_point)
    }

    /// Number of curve segments (move-to entries excluded).
    pub fn curve_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, PathSegment::QuadTo { .. }))
            .count()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let mid = Point::new(0.0, 10.0).midpoint(Point::new(4.0, 20.0));
        assert_eq!(mid, Point::new(2.0, 15.0));
    }

    #[test]
    fn quad_segments_chain_from_previous_end() {
        let mut path = StrokePath::new();
        path.move_to(Point::new(0.0, 0.0));

        let first = path.quad_to(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        assert_eq!(first.start, Point::new(0.0, 0.0));

        let second = path.quad_to(Point::new(10.0, 0.0), Point::new(10.0, 5.0));
        assert_eq!(second.start, Point::new(5.0, 0.0));
        assert_eq!(path.curve_count(), 2);
        assert_eq!(path.current_point(), Some(Point::new(10.0, 5.0)));
    }

    #[test]
    fn quad_on_empty_path_starts_at_control() {
        let mut path = StrokePath::new();
        let piece = path.quad_to(Point::new(3.0, 3.0), Point::new(6.0, 6.0));
        assert_eq!(piece.start, Point::new(3.0, 3.0));
        assert_eq!(path.segments().len(), 2);
    }

    #[test]
    fn reset_empties_path() {
        let mut path = StrokePath::new();
        path.move_to(Point::new(1.0, 1.0));
        path.quad_to(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.current_point(), None);
    }
}
