use super::*;
use crate::draw::{Color, InkCache, PathSegment, Point, StrokeStyle};
use crate::input::PointerEvent;

const TOLERANCE: f64 = 8.0;

const BACKGROUND: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

fn create_test_stroke_input() -> StrokeInput {
    StrokeInput::new(
        StrokeStyle::new(
            Color {
                r: 0.0,
                g: 0.0,
                b: 1.0,
                a: 1.0,
            },
            12.0,
        ),
        TOLERANCE,
    )
}

fn ink() -> InkCache {
    InkCache::new(200, 200, BACKGROUND).unwrap()
}

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Press(Point::new(x, y))
}

fn move_to(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move(Point::new(x, y))
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Release(Point::new(x, y))
}

#[test]
fn test_starts_idle() {
    let input = create_test_stroke_input();
    assert_eq!(input.state(), StrokeState::Idle);
    assert!(input.path().is_empty());
}

#[test]
fn test_press_enters_drawing_and_sets_anchor() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();

    let outcome = input.handle(press(100.0, 100.0), Some(&mut cache)).unwrap();

    assert_eq!(outcome, StrokeOutcome::Started(Point::new(100.0, 100.0)));
    assert!(!outcome.requests_redraw());
    assert_eq!(input.state(), StrokeState::Drawing);
    assert_eq!(input.anchor(), Point::new(100.0, 100.0));
    assert_eq!(
        input.path().segments(),
        &[PathSegment::MoveTo(Point::new(100.0, 100.0))]
    );
}

#[test]
fn test_sub_tolerance_moves_change_nothing() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();
    input.handle(press(50.0, 50.0), Some(&mut cache)).unwrap();
    let before = cache.snapshot().unwrap();

    for (x, y) in [(51.0, 50.0), (57.9, 57.9), (42.1, 50.0), (50.0, 43.0)] {
        let outcome = input.handle(move_to(x, y), Some(&mut cache)).unwrap();
        assert_eq!(outcome, StrokeOutcome::Ignored);
        assert!(!outcome.requests_redraw());
    }

    assert_eq!(input.anchor(), Point::new(50.0, 50.0));
    assert_eq!(input.sample(), Point::new(50.0, 43.0));
    assert_eq!(input.path().curve_count(), 0);
    assert_eq!(cache.snapshot().unwrap(), before);
}

#[test]
fn test_move_at_tolerance_commits_one_segment() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();
    input.handle(press(100.0, 100.0), Some(&mut cache)).unwrap();

    let target_y = 100.0 + TOLERANCE + 1.0;
    let outcome = input
        .handle(move_to(100.0, target_y), Some(&mut cache))
        .unwrap();

    let StrokeOutcome::Committed(segment) = outcome else {
        panic!("expected a committed segment, got {outcome:?}");
    };
    assert!(outcome.requests_redraw());
    assert_eq!(segment.control, Point::new(100.0, 100.0));
    assert_eq!(segment.end, Point::new(100.0, 100.0 + (TOLERANCE + 1.0) / 2.0));
    assert_eq!(input.anchor(), Point::new(100.0, target_y));
    assert_eq!(input.path().curve_count(), 1);
}

#[test]
fn test_exact_tolerance_on_one_axis_is_enough() {
    let mut input = create_test_stroke_input();
    input.handle(press(10.0, 10.0), None).unwrap();

    let outcome = input.handle(move_to(10.0 + TOLERANCE, 10.0), None).unwrap();
    assert!(matches!(outcome, StrokeOutcome::Committed(_)));
}

#[test]
fn test_segments_chain_through_midpoints() {
    let mut input = create_test_stroke_input();
    input.handle(press(0.0, 0.0), None).unwrap();
    input.handle(move_to(20.0, 0.0), None).unwrap();
    let outcome = input.handle(move_to(20.0, 20.0), None).unwrap();

    let StrokeOutcome::Committed(segment) = outcome else {
        panic!("expected a committed segment, got {outcome:?}");
    };
    assert_eq!(segment.start, Point::new(10.0, 0.0));
    assert_eq!(segment.control, Point::new(20.0, 0.0));
    assert_eq!(segment.end, Point::new(20.0, 10.0));
}

#[test]
fn test_release_returns_to_idle_and_keeps_ink() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();
    input.handle(press(100.0, 100.0), Some(&mut cache)).unwrap();
    input.handle(move_to(100.0, 140.0), Some(&mut cache)).unwrap();
    let inked = cache.snapshot().unwrap();

    let outcome = input.handle(release(100.0, 140.0), Some(&mut cache)).unwrap();

    assert_eq!(outcome, StrokeOutcome::Ended);
    assert_eq!(input.state(), StrokeState::Idle);
    assert!(input.path().is_empty());
    assert_eq!(cache.snapshot().unwrap(), inked);
    assert_ne!(cache.pixel(100, 110), Some(BACKGROUND.to_argb32()));
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();

    let outcome = input.handle(release(5.0, 5.0), Some(&mut cache)).unwrap();

    assert_eq!(outcome, StrokeOutcome::Ignored);
    assert_eq!(input.state(), StrokeState::Idle);
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();
    let before = cache.snapshot().unwrap();

    let outcome = input.handle(move_to(150.0, 150.0), Some(&mut cache)).unwrap();

    assert_eq!(outcome, StrokeOutcome::Ignored);
    assert_eq!(input.sample(), Point::default());
    assert_eq!(cache.snapshot().unwrap(), before);
}

#[test]
fn test_tap_draws_nothing() {
    let mut input = create_test_stroke_input();
    let mut cache = ink();
    let before = cache.snapshot().unwrap();

    input.handle(press(30.0, 30.0), Some(&mut cache)).unwrap();
    input.handle(release(30.0, 30.0), Some(&mut cache)).unwrap();

    assert_eq!(cache.snapshot().unwrap(), before);
}

#[test]
fn test_second_press_restarts_stroke() {
    let mut input = create_test_stroke_input();
    input.handle(press(0.0, 0.0), None).unwrap();
    input.handle(move_to(30.0, 0.0), None).unwrap();

    input.handle(press(80.0, 80.0), None).unwrap();

    assert_eq!(input.state(), StrokeState::Drawing);
    assert_eq!(input.anchor(), Point::new(80.0, 80.0));
    assert_eq!(input.path().curve_count(), 0);
}

#[test]
fn test_negative_tolerance_is_treated_as_zero() {
    let input = StrokeInput::new(StrokeStyle::default(), -3.0);
    assert_eq!(input.tolerance(), 0.0);
}
