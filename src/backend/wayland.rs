//! Wayland backend: a full-screen wlr-layer-shell surface rendered with Cairo
//! into shared-memory buffers.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
