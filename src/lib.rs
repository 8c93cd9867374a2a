//! Library exports for the minipaint drawing surface.
//!
//! The canvas core (ink cache, stroke state machine, configuration) is
//! platform independent and usable without a compositor; the Wayland
//! backend drives it from real pointer and touch input.

pub mod backend;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use canvas::{Canvas, CanvasSettings};
pub use config::Config;
