// Feeds pointer motion and left-button presses into the canvas as stroke events.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent as WlPointerEvent, PointerEventKind,
    PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::draw::Point;
use crate::input::{Contact, MouseButton, PointerEvent};

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[WlPointerEvent],
    ) {
        for event in events {
            let position = Point::new(event.position.0, event.position.1);
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({:.1}, {:.1})", position.x, position.y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    // Button releases outside the surface are never delivered.
                    self.lift_contact(Contact::Pointer);
                }
                PointerEventKind::Motion { .. } => {
                    self.dispatch_contact(Contact::Pointer, PointerEvent::Move(position));
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({:.1}, {:.1})",
                        button, position.x, position.y
                    );
                    if map_button(button) == Some(MouseButton::Left) {
                        self.dispatch_contact(Contact::Pointer, PointerEvent::Press(position));
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    if map_button(button) == Some(MouseButton::Left) {
                        self.dispatch_contact(Contact::Pointer, PointerEvent::Release(position));
                    }
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
