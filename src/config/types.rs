//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DEFAULT_FRAME_INSET, DEFAULT_STROKE_WIDTH};
use crate::input::DEFAULT_TOUCH_TOLERANCE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Paint settings, fixed for the lifetime of the canvas.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Fill color of the drawing surface - a named color or `[r, g, b]`
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Ink color for strokes and the frame outline
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Smooth stroke edges
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            antialias: default_antialias(),
        }
    }
}

/// Pointer sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Minimum movement in pixels, on either axis, before a new curve
    /// segment is added (valid range: 0.0 - 100.0). Filters input jitter.
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            touch_tolerance: default_touch_tolerance(),
        }
    }
}

/// Decorative frame drawn around the canvas on every repaint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FrameConfig {
    /// Draw the frame at all
    #[serde(default = "default_frame_enabled")]
    pub enabled: bool,

    /// Distance from each surface edge in pixels (valid range: 0 - 1000)
    #[serde(default = "default_frame_inset")]
    pub inset: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            enabled: default_frame_enabled(),
            inset: default_frame_inset(),
        }
    }
}

/// Performance tuning options.
///
/// Most users won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 1 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for frame callbacks between renders to avoid redundant repaints
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background_color() -> ColorSpec {
    ColorSpec::Rgb([255, 171, 145])
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Rgb([255, 235, 59])
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_antialias() -> bool {
    true
}

fn default_touch_tolerance() -> f64 {
    DEFAULT_TOUCH_TOLERANCE
}

fn default_frame_enabled() -> bool {
    true
}

fn default_frame_inset() -> u32 {
    DEFAULT_FRAME_INSET
}

fn default_buffer_count() -> u32 {
    2
}

fn default_enable_vsync() -> bool {
    true
}
