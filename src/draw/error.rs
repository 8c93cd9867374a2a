//! Errors raised while allocating or drawing into rasters.

use thiserror::Error;

/// Errors that can occur while managing the ink cache or rendering.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The off-screen raster could not be created.
    #[error("failed to allocate {width}x{height} ink cache: {source}")]
    Allocation {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    /// The requested raster size does not fit Cairo's coordinate space.
    #[error("surface size {width}x{height} is out of range")]
    InvalidSize { width: u32, height: u32 },

    /// A Cairo drawing operation failed.
    #[error("cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),
}
