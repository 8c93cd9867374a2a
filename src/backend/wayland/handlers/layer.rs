// Responds to layer-shell configure/close events; a new size rebuilds the ink cache.
use log::info;
use smithay_client_toolkit::shell::wlr_layer::{
    LayerShellHandler, LayerSurface, LayerSurfaceConfigure,
};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl LayerShellHandler for WaylandState {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed by compositor");
        self.canvas.request_exit();
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        let (width, height) = configure.new_size;
        info!("Layer surface configured: {}x{}", width, height);

        // Repeated configures with an unchanged size must not wipe the drawing.
        if width > 0 && height > 0 && self.surface.update_dimensions(width, height) {
            info!("Surface size changed - reallocating ink cache");
            self.resize_canvas(width, height);
        }

        self.surface.set_configured(true);
        self.canvas.request_redraw();
    }
}
