//! Rendering primitives for the ink cache (Cairo-based).
//!
//! This module defines the drawing types behind the canvas:
//! - [`Color`] and [`StrokeStyle`]: paint configuration
//! - [`StrokePath`]: smoothed geometry of the stroke in progress
//! - [`InkCache`]: persistent raster holding committed strokes
//! - [`RenderSurface`]: owner of the ink cache that composites each frame

pub mod color;
pub mod error;
pub mod ink;
pub mod path;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use error::DrawError;
pub use ink::InkCache;
pub use path::{PathSegment, Point, QuadSegment, StrokePath};
pub use style::{DEFAULT_STROKE_WIDTH, StrokeStyle};
pub use surface::{DEFAULT_FRAME_INSET, RenderSurface, frame_rect};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
