//! Persistent off-screen raster holding every committed stroke.

use super::color::Color;
use super::error::DrawError;
use super::path::QuadSegment;
use super::style::StrokeStyle;
use log::debug;

/// ARGB32 raster that accumulates ink between resizes.
///
/// Strokes are only ever added; the content is cleared by building a new cache
/// (see [`RenderSurface::resize`](super::RenderSurface::resize)). Dropping the
/// cache releases the underlying Cairo surface.
#[derive(Debug)]
pub struct InkCache {
    surface: cairo::ImageSurface,
    background: Color,
}

impl InkCache {
    /// Allocates a `width` x `height` raster filled with `background`.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidSize`] when the size does not fit Cairo's
    /// signed coordinates, or [`DrawError::Allocation`] when Cairo cannot
    /// create the surface.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, DrawError> {
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(DrawError::InvalidSize { width, height }),
        };

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h).map_err(
            |source| DrawError::Allocation {
                width: w,
                height: h,
                source,
            },
        )?;
        debug!("Allocated {}x{} ink cache", w, h);

        let mut cache = Self {
            surface,
            background,
        };
        cache.clear()?;
        Ok(cache)
    }

    pub fn width(&self) -> u32 {
        self.surface.width().max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height().max(0) as u32
    }

    /// Color the raster was filled with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Overwrites every pixel with the background color.
    pub fn clear(&mut self) -> Result<(), DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Source);
        self.background.apply(&ctx);
        ctx.paint()?;
        Ok(())
    }

    /// Strokes one curve piece on top of the existing ink.
    pub fn stroke_segment(
        &mut self,
        segment: &QuadSegment,
        style: &StrokeStyle,
    ) -> Result<(), DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        style.apply(&ctx);
        segment.trace(&ctx);
        ctx.stroke()?;
        Ok(())
    }

    /// The backing surface, for compositing onto the visible target.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Reads one pixel as a native-endian premultiplied ARGB32 value.
    ///
    /// Returns `None` when out of bounds or while a drawing context still
    /// references the surface.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let stride = self.surface.stride() as usize;
        self.surface.flush();
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Copies the raw pixel rows, for comparing cache contents.
    pub fn snapshot(&mut self) -> Option<Vec<u8>> {
        self.surface.flush();
        self.surface.data().ok().map(|data| data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::path::Point;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn new_cache_is_filled_with_background() {
        let mut cache = InkCache::new(16, 8, WHITE).unwrap();
        assert_eq!((cache.width(), cache.height()), (16, 8));
        assert_eq!(cache.pixel(0, 0), Some(WHITE.to_argb32()));
        assert_eq!(cache.pixel(15, 7), Some(WHITE.to_argb32()));
        assert_eq!(cache.pixel(16, 0), None);
    }

    #[test]
    fn stroking_a_segment_leaves_ink() {
        let mut cache = InkCache::new(64, 64, WHITE).unwrap();
        let segment = QuadSegment {
            start: Point::new(10.0, 32.0),
            control: Point::new(32.0, 32.0),
            end: Point::new(54.0, 32.0),
        };
        cache
            .stroke_segment(&segment, &StrokeStyle::new(BLACK, 6.0))
            .unwrap();
        assert_eq!(cache.pixel(32, 32), Some(BLACK.to_argb32()));
        assert_eq!(cache.pixel(32, 5), Some(WHITE.to_argb32()));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let err = InkCache::new(u32::MAX, 1, WHITE).unwrap_err();
        assert!(matches!(err, DrawError::InvalidSize { .. }));
    }
}
