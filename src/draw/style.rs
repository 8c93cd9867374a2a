//! Paint configuration shared by stroke and frame rendering.

use super::color::Color;

/// Default stroke width in pixels. Kept fractional so thin strokes are not rounded.
pub const DEFAULT_STROKE_WIDTH: f64 = 12.0;

/// Immutable stroke paint settings, fixed when the canvas is built.
///
/// Dithering is not exposed; cairo-rs has no dither control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Ink color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Join used between path segments
    pub line_join: cairo::LineJoin,
    /// Cap used at open path ends
    pub line_cap: cairo::LineCap,
    /// Smooth edges without changing geometry
    pub antialias: bool,
}

impl StrokeStyle {
    /// Round joins and caps with anti-aliasing, the look freehand ink needs.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            line_join: cairo::LineJoin::Round,
            line_cap: cairo::LineCap::Round,
            antialias: true,
        }
    }

    /// Returns a copy with anti-aliasing toggled.
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Loads these settings into a Cairo context before stroking.
    pub fn apply(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_join(self.line_join);
        ctx.set_line_cap(self.line_cap);
        ctx.set_antialias(if self.antialias {
            cairo::Antialias::Best
        } else {
            cairo::Antialias::None
        });
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(super::color::BLACK, DEFAULT_STROKE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    fn context() -> cairo::Context {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
        cairo::Context::new(&surface).unwrap()
    }

    #[test]
    fn apply_loads_round_antialiased_pen() {
        let ctx = context();
        StrokeStyle::new(RED, 7.5).apply(&ctx);

        assert_eq!(ctx.line_width(), 7.5);
        assert_eq!(ctx.line_join(), cairo::LineJoin::Round);
        assert_eq!(ctx.line_cap(), cairo::LineCap::Round);
        assert_eq!(ctx.antialias(), cairo::Antialias::Best);
    }

    #[test]
    fn antialias_can_be_disabled() {
        let ctx = context();
        StrokeStyle::default().with_antialias(false).apply(&ctx);
        assert_eq!(ctx.antialias(), cairo::Antialias::None);
    }
}
