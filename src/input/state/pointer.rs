use crate::draw::{DrawError, InkCache, Point};
use crate::input::events::PointerEvent;
use log::debug;

use super::{StrokeInput, StrokeOutcome, StrokeState};

impl StrokeInput {
    /// Applies one pointer event to the state machine.
    ///
    /// # Arguments
    /// * `event` - Press, move or release with its surface position
    /// * `ink` - Raster to commit new segments into; `None` before the
    ///   surface has a size, in which case geometry is tracked but not inked
    ///
    /// # Behavior
    /// - Press: restarts the path at the position and enters `Drawing`
    /// - Move while drawing: adds a smoothing curve once the displacement
    ///   reaches the tolerance on either axis, and inks it
    /// - Release: discards the path and returns to `Idle`
    /// - Move or release while idle: ignored
    ///
    /// # Errors
    /// Propagates Cairo failures from inking a committed segment.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        ink: Option<&mut InkCache>,
    ) -> Result<StrokeOutcome, DrawError> {
        match (self.state, event) {
            (_, PointerEvent::Press(position)) => Ok(self.touch_start(position)),
            (StrokeState::Drawing, PointerEvent::Move(position)) => {
                self.touch_move(position, ink)
            }
            (StrokeState::Drawing, PointerEvent::Release(_)) => Ok(self.touch_up()),
            (StrokeState::Idle, PointerEvent::Move(_) | PointerEvent::Release(_)) => {
                debug!("Ignoring {:?} with no stroke in progress", event);
                Ok(StrokeOutcome::Ignored)
            }
        }
    }

    fn touch_start(&mut self, position: Point) -> StrokeOutcome {
        self.sample = position;
        self.path.reset();
        self.path.move_to(position);
        self.anchor = position;
        self.state = StrokeState::Drawing;
        debug!("Stroke started at ({:.1}, {:.1})", position.x, position.y);
        StrokeOutcome::Started(position)
    }

    fn touch_move(
        &mut self,
        position: Point,
        ink: Option<&mut InkCache>,
    ) -> Result<StrokeOutcome, DrawError> {
        self.sample = position;

        let dx = (self.sample.x - self.anchor.x).abs();
        let dy = (self.sample.y - self.anchor.y).abs();
        if dx < self.tolerance && dy < self.tolerance {
            return Ok(StrokeOutcome::Ignored);
        }

        let segment = self
            .path
            .quad_to(self.anchor, self.anchor.midpoint(self.sample));
        self.anchor = self.sample;

        match ink {
            Some(ink) => ink.stroke_segment(&segment, &self.style)?,
            None => debug!("No ink cache yet; segment kept in path only"),
        }

        Ok(StrokeOutcome::Committed(segment))
    }

    fn touch_up(&mut self) -> StrokeOutcome {
        debug!(
            "Stroke ended after {} segment(s)",
            self.path.curve_count()
        );
        self.path.reset();
        self.state = StrokeState::Idle;
        StrokeOutcome::Ended
    }
}
