//! Layer-surface bookkeeping and the shared-memory pool frames are drawn into.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the layer surface, its buffer pool, and compositor-assigned size.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates an unconfigured surface state.
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            width: 0,
            height: 0,
            configured: false,
            frame_callback_pending: false,
        }
    }

    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Records a configure size, returning `true` if it differs from the last one.
    ///
    /// A size change invalidates the pool; it is rebuilt on the next render.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Byte stride of one ARGB8888 row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Returns a pool large enough for `buffer_count` frames at the current size.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let buffer_size = self.stride() * self.height as usize;
            let pool_size = buffer_size * buffer_count.max(1);
            info!(
                "Creating SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}
