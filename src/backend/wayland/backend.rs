// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    canvas::{Canvas, CanvasSettings},
    config::Config,
};

/// Consecutive render failures tolerated before the loop gives up.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let settings = CanvasSettings::from_config(&self.config);
        debug!("  Stroke: {:?}", settings.style);
        debug!("  Background: {:?}", settings.background);
        debug!("  Touch tolerance: {:.1}px", settings.tolerance);
        debug!("  Frame inset: {:?}", settings.frame_inset);
        debug!("  Buffer count: {}", self.config.performance.buffer_count);
        debug!("  VSync: {}", self.config.performance.enable_vsync);

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            self.config.clone(),
            Canvas::new(settings),
        );

        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("minipaint"),
            None,
        );

        // Anchored on all edges with size 0x0: the compositor assigns the full output.
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        let mut consecutive_render_failures = 0u32;

        loop {
            if state.canvas.should_exit() {
                info!("Exit requested, breaking event loop");
                break;
            }

            event_queue
                .blocking_dispatch(&mut state)
                .context("Wayland event queue error")?;

            if state.canvas.should_exit() {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            // Throttled to the display refresh rate when vsync is enabled.
            let can_render = state.surface.is_configured()
                && state.canvas.needs_redraw()
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if !can_render {
                continue;
            }

            match state.render(&qh) {
                Ok(()) => {
                    consecutive_render_failures = 0;
                    state.canvas.take_redraw_request();
                    if state.config.performance.enable_vsync {
                        state.surface.set_frame_callback_pending(true);
                    }
                }
                Err(e) => {
                    consecutive_render_failures += 1;
                    warn!(
                        "Rendering error (attempt {}/{}): {:#}",
                        consecutive_render_failures, MAX_RENDER_FAILURES, e
                    );

                    if consecutive_render_failures >= MAX_RENDER_FAILURES {
                        return Err(e.context(format!(
                            "Too many consecutive render failures ({})",
                            consecutive_render_failures
                        )));
                    }

                    // Clear redraw flag to avoid a tight error loop
                    state.canvas.take_redraw_request();
                }
            }
        }

        info!("Wayland backend exiting");

        match state.fatal_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
