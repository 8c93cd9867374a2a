// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules, plus the canvas every input callback feeds.
use anyhow::{Context, Result};
use log::{debug, error};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    canvas::Canvas,
    config::Config,
    input::{Contact, ContactRouter, PointerEvent},
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Drawing state
    pub(super) canvas: Canvas,
    /// Device that owns the stroke in progress
    pub(super) contacts: ContactRouter,

    /// Unrecoverable error raised inside a callback, returned by the event loop
    pub(super) fatal_error: Option<anyhow::Error>,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        canvas: Canvas,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            canvas,
            contacts: ContactRouter::new(),
            fatal_error: None,
        }
    }

    /// Forwards a pointer or touch event to the canvas.
    ///
    /// Inking failures are fatal: the error is stored and the loop asked to stop.
    pub(super) fn dispatch_pointer(&mut self, event: PointerEvent) {
        if let Err(err) = self.canvas.on_pointer_event(event) {
            self.fail(anyhow::Error::new(err).context("Failed to draw stroke segment"));
        }
    }

    /// Routes a device event through stroke ownership before it reaches the canvas.
    pub(super) fn dispatch_contact(&mut self, contact: Contact, event: PointerEvent) {
        match self.contacts.route(contact, event) {
            Some(event) => self.dispatch_pointer(event),
            None if !matches!(event, PointerEvent::Move(_)) => {
                debug!(
                    "Dropping {:?} from {:?} (stroke owner: {:?})",
                    event,
                    contact,
                    self.contacts.owner()
                )
            }
            None => {}
        }
    }

    /// Ends the stroke if `contact` owns it, at its last routed position.
    pub(super) fn lift_contact(&mut self, contact: Contact) {
        if let Some(event) = self.contacts.lift(contact) {
            self.dispatch_pointer(event);
        }
    }

    /// Ends a stroke owned by any touch point.
    pub(super) fn cancel_touch(&mut self) {
        if let Some(event) = self.contacts.cancel_touch() {
            self.dispatch_pointer(event);
        }
    }

    /// Applies a new compositor-assigned size to the canvas.
    pub(super) fn resize_canvas(&mut self, width: u32, height: u32) {
        if let Err(err) = self.canvas.on_surface_resized(width, height) {
            self.fail(anyhow::Error::new(err).context("Failed to allocate ink cache"));
        }
    }

    pub(super) fn fail(&mut self, err: anyhow::Error) {
        error!("{:#}", err);
        if self.fatal_error.is_none() {
            self.fatal_error = Some(err);
        }
        self.canvas.request_exit();
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = self.surface.stride();

        let (buffer, pixels) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                stride as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `pixels` is a mutable slice from the SlotPool holding exactly
        // stride * height bytes in ARGB8888 layout, which matches Cairo's ARgb32
        // with the same stride. The Cairo surface and context are dropped below,
        // before the buffer is attached and handed to the compositor, and nothing
        // else touches this memory while they are alive.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                pixels.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                stride as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        self.canvas
            .on_redraw_requested(&ctx)
            .context("Failed to composite canvas")?;

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
