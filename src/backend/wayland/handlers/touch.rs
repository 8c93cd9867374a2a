// Maps wl_touch contacts onto stroke events; only the contact owning the stroke draws.
use log::debug;
use smithay_client_toolkit::seat::touch::TouchHandler;
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_surface, wl_touch},
};

use crate::draw::Point;
use crate::input::{Contact, PointerEvent};

use super::super::state::WaylandState;

impl TouchHandler for WaylandState {
    fn down(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        _surface: wl_surface::WlSurface,
        id: i32,
        position: (f64, f64),
    ) {
        let point = Point::new(position.0, position.1);
        debug!("Touch {} down at ({:.1}, {:.1})", id, point.x, point.y);
        self.dispatch_contact(Contact::Touch(id), PointerEvent::Press(point));
    }

    fn up(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _serial: u32,
        _time: u32,
        id: i32,
    ) {
        debug!("Touch {} up", id);
        // wl_touch.up carries no position; the stroke ends where it last moved.
        self.lift_contact(Contact::Touch(id));
    }

    fn motion(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _time: u32,
        id: i32,
        position: (f64, f64),
    ) {
        let point = Point::new(position.0, position.1);
        self.dispatch_contact(Contact::Touch(id), PointerEvent::Move(point));
    }

    fn shape(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _major: f64,
        _minor: f64,
    ) {
    }

    fn orientation(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &wl_touch::WlTouch,
        _id: i32,
        _orientation: f64,
    ) {
    }

    fn cancel(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _touch: &wl_touch::WlTouch) {
        debug!("Touch sequence cancelled by compositor");
        self.cancel_touch();
    }
}
