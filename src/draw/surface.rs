//! Render surface manager: owns the ink cache and composites each frame.

use super::color::Color;
use super::error::DrawError;
use super::ink::InkCache;
use super::style::StrokeStyle;
use crate::util::Rect;
use log::info;

/// Default margin between the surface edge and the decorative frame.
pub const DEFAULT_FRAME_INSET: u32 = 40;

/// Owns the persistent ink raster and the decorative frame around it.
///
/// The raster only exists once the first size is known; until then the
/// visible surface is painted with the background color alone.
#[derive(Debug)]
pub struct RenderSurface {
    ink: Option<InkCache>,
    frame: Option<Rect>,
    frame_inset: Option<u32>,
    background: Color,
    style: StrokeStyle,
}

impl RenderSurface {
    /// Creates an unsized surface manager.
    ///
    /// # Arguments
    /// * `background` - Fill color for fresh ink caches
    /// * `style` - Paint used for the frame outline
    /// * `frame_inset` - Frame margin in pixels, or `None` to skip the frame
    pub fn new(background: Color, style: StrokeStyle, frame_inset: Option<u32>) -> Self {
        Self {
            ink: None,
            frame: None,
            frame_inset,
            background,
            style,
        }
    }

    /// Rebuilds the ink cache for a new surface size.
    ///
    /// The previous raster is dropped before the new one is allocated, so the
    /// two never coexist. Any existing ink is discarded.
    ///
    /// # Errors
    /// Returns an error when the raster cannot be allocated; the manager is
    /// left without an ink cache in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), DrawError> {
        self.ink = None;
        self.frame = None;

        self.ink = Some(InkCache::new(width, height, self.background)?);
        self.frame = self
            .frame_inset
            .and_then(|inset| frame_rect(width, height, inset));

        info!(
            "Ink cache resized to {}x{} (frame: {:?})",
            width, height, self.frame
        );
        Ok(())
    }

    /// Composites the ink cache and the frame onto `ctx`.
    ///
    /// Reads the cache only; calling this any number of times between input
    /// events produces the same output.
    pub fn render(&self, ctx: &cairo::Context) -> Result<(), DrawError> {
        ctx.save()?;
        ctx.set_operator(cairo::Operator::Source);
        match &self.ink {
            Some(ink) => ctx.set_source_surface(ink.surface(), 0.0, 0.0)?,
            None => self.background.apply(ctx),
        }
        ctx.paint()?;
        ctx.restore()?;

        if let Some(frame) = self.frame {
            ctx.save()?;
            self.style.apply(ctx);
            ctx.rectangle(
                frame.x as f64,
                frame.y as f64,
                frame.width as f64,
                frame.height as f64,
            );
            ctx.stroke()?;
            ctx.restore()?;
        }

        Ok(())
    }

    pub fn ink(&self) -> Option<&InkCache> {
        self.ink.as_ref()
    }

    pub fn ink_mut(&mut self) -> Option<&mut InkCache> {
        self.ink.as_mut()
    }

    /// Current frame rectangle, if the surface is large enough to hold one.
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Current surface size, or `None` before the first resize.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.ink.as_ref().map(|ink| (ink.width(), ink.height()))
    }
}

/// Rectangle inset by `inset` on every side of a `width` x `height` area.
pub fn frame_rect(width: u32, height: u32, inset: u32) -> Option<Rect> {
    let inset = i32::try_from(inset).ok()?;
    let width = i32::try_from(width).ok()?;
    let height = i32::try_from(height).ok()?;
    Rect::from_min_max(inset, inset, width - inset, height - inset)
}
