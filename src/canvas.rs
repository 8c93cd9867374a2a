//! Single drawing view: wires the stroke state machine to the render surface.

use crate::config::Config;
use crate::draw::{Color, DrawError, RenderSurface, StrokeStyle};
use crate::input::{Key, PointerEvent, StrokeInput, StrokeOutcome};
use log::{debug, info};

/// Construction-time settings for a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    /// Fill color of the ink cache
    pub background: Color,
    /// Paint for strokes and the frame outline
    pub style: StrokeStyle,
    /// Minimum per-axis displacement before a segment is committed
    pub tolerance: f64,
    /// Frame margin in pixels, `None` to draw no frame
    pub frame_inset: Option<u32>,
}

impl CanvasSettings {
    /// Resolves settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let style = StrokeStyle::new(
            config.drawing.stroke_color.to_color(),
            config.drawing.stroke_width,
        )
        .with_antialias(config.drawing.antialias);

        Self {
            background: config.drawing.background_color.to_color(),
            style,
            tolerance: config.input.touch_tolerance,
            frame_inset: config.frame.enabled.then_some(config.frame.inset),
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// The whole drawing application state behind one full-screen surface.
///
/// Backends forward size changes, pointer events and key presses, poll
/// [`take_redraw_request`](Self::take_redraw_request), and call
/// [`on_redraw_requested`](Self::on_redraw_requested) with a target context.
#[derive(Debug)]
pub struct Canvas {
    surface: RenderSurface,
    stroke: StrokeInput,
    needs_redraw: bool,
    should_exit: bool,
}

impl Canvas {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            surface: RenderSurface::new(settings.background, settings.style, settings.frame_inset),
            stroke: StrokeInput::new(settings.style, settings.tolerance),
            needs_redraw: true,
            should_exit: false,
        }
    }

    /// Reallocates the ink cache for a new surface size, clearing all ink.
    pub fn on_surface_resized(&mut self, width: u32, height: u32) -> Result<(), DrawError> {
        self.surface.resize(width, height)?;
        self.request_redraw();
        Ok(())
    }

    /// Feeds one pointer event through the stroke state machine.
    ///
    /// Requests a redraw whenever a segment is committed to the ink cache.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Result<StrokeOutcome, DrawError> {
        let outcome = self.stroke.handle(event, self.surface.ink_mut())?;
        if outcome.requests_redraw() {
            self.request_redraw();
        }
        Ok(outcome)
    }

    /// Paints the current ink and frame onto `ctx`.
    pub fn on_redraw_requested(&self, ctx: &cairo::Context) -> Result<(), DrawError> {
        self.surface.render(ctx)
    }

    /// Handles a key press; Escape (or `q`) asks the backend to quit.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Escape | Key::Char('q') | Key::Char('Q') => {
                info!("Exit requested");
                self.should_exit = true;
            }
            other => debug!("Unhandled key: {:?}", other),
        }
    }

    /// Marks the visible surface as stale.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Asks the backend loop to stop (e.g. the compositor closed the surface).
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RenderSurface {
        &mut self.surface
    }

    pub fn stroke(&self) -> &StrokeInput {
        &self.stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Point, WHITE};

    fn canvas() -> Canvas {
        Canvas::new(CanvasSettings {
            background: WHITE,
            style: StrokeStyle::new(BLACK, 12.0),
            tolerance: 4.0,
            frame_inset: Some(40),
        })
    }

    #[test]
    fn resize_requests_redraw() {
        let mut canvas = canvas();
        assert!(canvas.take_redraw_request());
        assert!(!canvas.needs_redraw());

        canvas.on_surface_resized(300, 200).unwrap();
        assert!(canvas.take_redraw_request());
        assert_eq!(canvas.surface().size(), Some((300, 200)));
    }

    #[test]
    fn only_committed_moves_request_redraw() {
        let mut canvas = canvas();
        canvas.on_surface_resized(300, 200).unwrap();
        canvas.take_redraw_request();

        canvas
            .on_pointer_event(PointerEvent::Press(Point::new(50.0, 50.0)))
            .unwrap();
        assert!(!canvas.needs_redraw());

        canvas
            .on_pointer_event(PointerEvent::Move(Point::new(51.0, 52.0)))
            .unwrap();
        assert!(!canvas.needs_redraw());

        canvas
            .on_pointer_event(PointerEvent::Move(Point::new(60.0, 50.0)))
            .unwrap();
        assert!(canvas.take_redraw_request());

        canvas
            .on_pointer_event(PointerEvent::Release(Point::new(60.0, 50.0)))
            .unwrap();
        assert!(!canvas.needs_redraw());
    }

    #[test]
    fn events_before_first_resize_are_tolerated() {
        let mut canvas = canvas();
        canvas
            .on_pointer_event(PointerEvent::Press(Point::new(0.0, 0.0)))
            .unwrap();
        let outcome = canvas
            .on_pointer_event(PointerEvent::Move(Point::new(20.0, 0.0)))
            .unwrap();
        assert!(matches!(outcome, StrokeOutcome::Committed(_)));
        assert!(canvas.surface().ink().is_none());
    }

    #[test]
    fn escape_requests_exit() {
        let mut canvas = canvas();
        canvas.on_key_press(Key::Char('x'));
        assert!(!canvas.should_exit());
        canvas.on_key_press(Key::Escape);
        assert!(canvas.should_exit());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.frame.enabled = false;
        config.input.touch_tolerance = 3.5;

        let settings = CanvasSettings::from_config(&config);
        assert_eq!(settings.frame_inset, None);
        assert_eq!(settings.tolerance, 3.5);
        assert_eq!(settings.style.width, config.drawing.stroke_width);
    }
}
