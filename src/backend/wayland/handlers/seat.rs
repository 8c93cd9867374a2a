// Manages seat capabilities and requests keyboard, pointer and touch devices.
use log::{debug, info, warn};
use smithay_client_toolkit::seat::{Capability, SeatHandler, SeatState};
use wayland_client::{Connection, QueueHandle, protocol::wl_seat};

use crate::input::Contact;

use super::super::state::WaylandState;

impl SeatHandler for WaylandState {
    fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    fn new_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("New seat available");
    }

    fn new_capability(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        if capability == Capability::Keyboard {
            info!("Keyboard capability available");
            if let Err(err) = self.seat_state.get_keyboard(qh, &seat, None) {
                warn!("Failed to bind keyboard: {}", err);
            }
        }

        if capability == Capability::Pointer {
            info!("Pointer capability available");
            if let Err(err) = self.seat_state.get_pointer(qh, &seat) {
                warn!("Failed to bind pointer: {}", err);
            }
        }

        if capability == Capability::Touch {
            info!("Touch capability available");
            if let Err(err) = self.seat_state.get_touch(qh, &seat) {
                warn!("Failed to bind touch: {}", err);
            }
        }
    }

    fn remove_capability(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        if capability == Capability::Keyboard {
            info!("Keyboard capability removed");
        }
        if capability == Capability::Pointer {
            info!("Pointer capability removed");
            self.lift_contact(Contact::Pointer);
        }
        if capability == Capability::Touch {
            info!("Touch capability removed");
            self.cancel_touch();
        }
    }

    fn remove_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("Seat removed");
    }
}
