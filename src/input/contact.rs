//! Ownership of the single active stroke across pointer and touch devices.

use crate::draw::Point;

use super::events::PointerEvent;

/// Input device a stroke event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Mouse or other pointer device
    Pointer,
    /// Touch point with its protocol id
    Touch(i32),
}

/// Filters raw device events so only the contact that started a stroke can
/// move or end it.
///
/// Hover motion with no stroke in progress is dropped, and events from a
/// second device while a stroke is owned are ignored until that stroke ends.
#[derive(Debug, Default)]
pub struct ContactRouter {
    owner: Option<Contact>,
    last: Point,
}

impl ContactRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contact currently drawing, if any.
    pub fn owner(&self) -> Option<Contact> {
        self.owner
    }

    /// Passes `event` through when `contact` may act on the stroke.
    pub fn route(&mut self, contact: Contact, event: PointerEvent) -> Option<PointerEvent> {
        match (event, self.owner) {
            (PointerEvent::Press(point), None) => {
                self.owner = Some(contact);
                self.last = point;
                Some(event)
            }
            (PointerEvent::Press(point), Some(owner)) if owner == contact => {
                self.last = point;
                Some(event)
            }
            (PointerEvent::Move(point), Some(owner)) if owner == contact => {
                self.last = point;
                Some(event)
            }
            (PointerEvent::Release(point), Some(owner)) if owner == contact => {
                self.owner = None;
                self.last = point;
                Some(event)
            }
            _ => None,
        }
    }

    /// Ends the stroke at its last position if `contact` owns it.
    ///
    /// Used for device events that carry no position (touch up, pointer
    /// leave) or that take the device away.
    pub fn lift(&mut self, contact: Contact) -> Option<PointerEvent> {
        if self.owner != Some(contact) {
            return None;
        }
        self.owner = None;
        Some(PointerEvent::Release(self.last))
    }

    /// Ends a stroke owned by any touch point.
    pub fn cancel_touch(&mut self) -> Option<PointerEvent> {
        match self.owner {
            Some(contact @ Contact::Touch(_)) => self.lift(contact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Press(Point::new(x, y))
    }

    fn motion(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(Point::new(x, y))
    }

    #[test]
    fn hover_without_stroke_is_dropped() {
        let mut router = ContactRouter::new();
        assert_eq!(router.route(Contact::Pointer, motion(10.0, 10.0)), None);
        assert_eq!(router.owner(), None);
    }

    #[test]
    fn pointer_motion_cannot_steer_touch_stroke() {
        let mut router = ContactRouter::new();
        assert!(router.route(Contact::Touch(3), press(50.0, 50.0)).is_some());

        assert_eq!(router.route(Contact::Pointer, motion(400.0, 300.0)), None);
        assert_eq!(router.route(Contact::Pointer, press(400.0, 300.0)), None);
        assert_eq!(router.lift(Contact::Pointer), None);
        assert_eq!(router.owner(), Some(Contact::Touch(3)));

        assert_eq!(
            router.route(Contact::Touch(3), motion(60.0, 50.0)),
            Some(motion(60.0, 50.0))
        );
    }

    #[test]
    fn second_finger_is_ignored_until_first_lifts() {
        let mut router = ContactRouter::new();
        router.route(Contact::Touch(1), press(0.0, 0.0));
        assert_eq!(router.route(Contact::Touch(2), press(9.0, 9.0)), None);
        assert_eq!(router.route(Contact::Touch(2), motion(20.0, 20.0)), None);

        assert_eq!(
            router.lift(Contact::Touch(1)),
            Some(PointerEvent::Release(Point::new(0.0, 0.0)))
        );
        assert_eq!(
            router.route(Contact::Touch(2), press(9.0, 9.0)),
            Some(press(9.0, 9.0))
        );
    }

    #[test]
    fn lift_releases_at_last_routed_point() {
        let mut router = ContactRouter::new();
        router.route(Contact::Pointer, press(1.0, 1.0));
        router.route(Contact::Pointer, motion(30.0, 40.0));

        assert_eq!(
            router.lift(Contact::Pointer),
            Some(PointerEvent::Release(Point::new(30.0, 40.0)))
        );
        assert_eq!(router.owner(), None);
        assert_eq!(router.lift(Contact::Pointer), None);
    }

    #[test]
    fn cancel_touch_only_ends_touch_strokes() {
        let mut router = ContactRouter::new();
        router.route(Contact::Pointer, press(5.0, 5.0));
        assert_eq!(router.cancel_touch(), None);
        assert_eq!(router.owner(), Some(Contact::Pointer));

        router.route(Contact::Pointer, PointerEvent::Release(Point::new(5.0, 5.0)));
        router.route(Contact::Touch(7), press(8.0, 8.0));
        router.route(Contact::Touch(7), motion(12.0, 8.0));
        assert_eq!(
            router.cancel_touch(),
            Some(PointerEvent::Release(Point::new(12.0, 8.0)))
        );
        assert_eq!(router.owner(), None);
    }
}
