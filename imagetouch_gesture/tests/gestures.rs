// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `imagetouch_gesture` crate.
//!
//! These drive whole gesture sequences through the public API and check the
//! resulting transform together with what the application listener heard.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use imagetouch_gesture::{
    Assignment, DragListener, FlingSample, HostRequests, ImageViewTouch, InteractionState,
    PinchListener, PointerAction, PointerEvent, Slot, StepZoom, TapListener, TouchConfig,
    TouchListener,
};
use kurbo::{Point, Size, Vec2};
use web_time::Instant;

const EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
enum Heard {
    Scaling(bool),
    Bitmap(Option<Size>),
    DoubleTap,
    LongPress,
}

#[derive(Clone, Default)]
struct Log {
    heard: Rc<RefCell<Vec<Heard>>>,
    claim_double_tap: bool,
}

impl Log {
    fn take(&self) -> Vec<Heard> {
        core::mem::take(&mut *self.heard.borrow_mut())
    }

    fn scaling(&self) -> Vec<bool> {
        self.take()
            .into_iter()
            .filter_map(|h| match h {
                Heard::Scaling(active) => Some(active),
                _ => None,
            })
            .collect()
    }
}

impl TouchListener<Size> for Log {
    fn on_image_double_tap(&mut self, _at: Point) -> bool {
        self.heard.borrow_mut().push(Heard::DoubleTap);
        self.claim_double_tap
    }

    fn on_image_scaling(&mut self, active: bool) {
        self.heard.borrow_mut().push(Heard::Scaling(active));
    }

    fn on_bitmap_changed(&mut self, image: Option<&Size>) {
        self.heard.borrow_mut().push(Heard::Bitmap(image.copied()));
    }

    fn on_image_long_press(&mut self, _at: Point) {
        self.heard.borrow_mut().push(Heard::LongPress);
    }
}

fn view_with_log(view: Size, image: Size) -> (ImageViewTouch<Size>, Log) {
    let log = Log::default();
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.set_listener(log.clone());
    v.on_layout(view);
    v.set_image(Some(image), true);
    log.take();
    v.take_requests();
    (v, log)
}

fn pointer(action: PointerAction, x: f64, y: f64, at: Instant) -> PointerEvent {
    PointerEvent::new(action, Point::new(x, y), at)
}

fn settle(v: &mut ImageViewTouch<Size>, from: Instant) -> Instant {
    let mut now = from;
    while v.tick(now) {
        now += Duration::from_millis(16);
    }
    now
}

#[test]
fn pinch_is_capped_at_max_zoom_and_tracks_soft_factor() {
    let (mut v, log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.assign(
        [Some(Size::new(100.0, 100.0)), None],
        Slot::Right,
        true,
        None,
        Some(1.5),
    );
    log.take();
    assert_eq!(v.scale_factor(), 1.0);

    assert!(v.on_scale_begin(Point::new(50.0, 50.0)));
    assert!(v.on_scale(2.0, Point::new(50.0, 50.0)));
    assert!((v.scale() - 1.5).abs() < EPS);
    assert!((v.scale_factor() - 1.5).abs() < EPS);

    v.on_scale_end(Instant::now());
    assert_eq!(log.scaling(), vec![true, false]);
    assert_eq!(v.interaction_state(), InteractionState::Idle);
}

#[test]
fn pinch_deltas_compound_through_the_tracked_factor() {
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.on_scale_begin(Point::new(50.0, 50.0));
    v.on_scale(1.2, Point::new(50.0, 50.0));
    v.on_scale(1.25, Point::new(50.0, 50.0));
    assert!((v.scale() - 1.5).abs() < EPS);
    v.on_scale_end(Instant::now());
}

#[test]
fn pinch_below_min_springs_back_on_release() {
    let t0 = Instant::now();
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.set_min_zoom(0.5);

    v.on_scale_begin(Point::new(50.0, 50.0));
    v.on_scale(0.2, Point::new(50.0, 50.0));
    assert!((v.scale() - 0.2).abs() < EPS);
    assert!((v.scale_factor() - 0.2).abs() < EPS);

    v.on_scale_end(t0);
    assert!(v.is_animating());
    settle(&mut v, t0);
    assert!((v.scale() - 0.5).abs() < EPS);
    assert!((v.scale_factor() - 0.5).abs() < EPS);
}

#[test]
fn pointer_up_during_pinch_ends_it_once() {
    let t0 = Instant::now();
    let (mut v, log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.on_pointer(&pointer(PointerAction::Down, 40.0, 40.0, t0));
    v.on_scale_begin(Point::new(50.0, 50.0));
    v.on_pointer(&pointer(PointerAction::Up, 40.0, 40.0, t0 + Duration::from_millis(80)));
    v.on_scale_end(t0 + Duration::from_millis(80));
    assert_eq!(log.scaling(), vec![true, false]);
}

#[test]
fn fling_scrolls_half_the_displacement() {
    let t0 = Instant::now();
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.zoom_to(3.0);
    let start = v.bitmap_rect().map_or(0.0, |r| r.x0);

    let fling = FlingSample {
        origin: Point::new(20.0, 50.0),
        position: Point::new(140.0, 50.0),
        velocity: Vec2::new(900.0, 0.0),
        pointer_count: 1,
        time: t0,
    };
    assert!(v.on_fling(&fling));
    assert!(v.tick(t0 + Duration::from_millis(299)));
    assert!(!v.tick(t0 + Duration::from_millis(300)));

    let end = v.bitmap_rect().map_or(0.0, |r| r.x0);
    assert!((end - start - 60.0).abs() < 1e-6);
    assert!(v.take_requests().contains(HostRequests::REDRAW));
}

#[test]
fn slow_or_multi_pointer_fling_does_nothing() {
    let t0 = Instant::now();
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.zoom_to(3.0);

    let slow = FlingSample {
        origin: Point::new(20.0, 50.0),
        position: Point::new(140.0, 50.0),
        velocity: Vec2::new(799.0, -800.0),
        pointer_count: 1,
        time: t0,
    };
    assert!(!v.on_fling(&slow));
    assert!(!v.is_animating());

    let two_fingers = FlingSample {
        velocity: Vec2::new(2000.0, 0.0),
        pointer_count: 2,
        ..slow
    };
    assert!(!v.on_fling(&two_fingers));
    assert!(!v.is_animating());
}

#[test]
fn one_hand_zoom_reports_begin_and_end_exactly_once() {
    let t0 = Instant::now();
    let (mut v, log) = view_with_log(Size::new(100.0, 200.0), Size::new(100.0, 200.0));

    v.on_pointer(&pointer(PointerAction::Down, 50.0, 100.0, t0));
    assert!(v.tick(t0 + Duration::from_millis(100)));
    assert!(log.scaling().is_empty());

    v.tick(t0 + Duration::from_millis(300));
    assert_eq!(v.interaction_state(), InteractionState::OneHandZooming);

    for (i, y) in [95.0, 90.0, 80.0, 85.0].into_iter().enumerate() {
        let at = t0 + Duration::from_millis(320 + 16 * i as u64);
        v.on_pointer(&pointer(PointerAction::Move, 50.0, y, at));
    }
    // Net 15px up over a 200px view.
    assert!((v.scale() - 20f64.powf(15.0 / 200.0)).abs() < 1e-9);

    v.on_pointer(&pointer(PointerAction::Up, 50.0, 85.0, t0 + Duration::from_millis(400)));
    assert_eq!(log.scaling(), vec![true, false]);
    assert_eq!(v.interaction_state(), InteractionState::Idle);
}

#[test]
fn recognizers_are_muted_during_one_hand_zoom() {
    let t0 = Instant::now();
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.on_pointer(&pointer(PointerAction::Down, 50.0, 50.0, t0));
    v.tick(t0 + Duration::from_millis(300));

    assert!(!v.on_scale_begin(Point::new(50.0, 50.0)));
    assert!(!v.on_double_tap(Point::new(50.0, 50.0), t0));
    assert_eq!(v.interaction_state(), InteractionState::OneHandZooming);
}

#[test]
fn assignment_waits_for_layout() {
    let log = Log::default();
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.set_listener(log.clone());

    assert_eq!(
        v.set_image(Some(Size::new(300.0, 100.0)), true),
        Assignment::Deferred
    );
    assert!(log.take().is_empty());
    assert!(v.bitmap_rect().is_none());

    v.on_layout(Size::ZERO);
    assert!(log.take().is_empty());

    v.on_layout(Size::new(150.0, 150.0));
    assert_eq!(log.take(), vec![Heard::Bitmap(Some(Size::new(300.0, 100.0)))]);
    let rect = v.bitmap_rect().map(|r| (r.x0, r.y0, r.x1, r.y1));
    assert_eq!(rect, Some((0.0, 50.0, 150.0, 100.0)));
}

#[test]
fn edge_drag_switches_slot_once() {
    let t0 = Instant::now();
    let log = Log::default();
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.set_listener(log.clone());
    v.on_layout(Size::new(100.0, 100.0));
    v.set_images(
        Some(Size::new(100.0, 100.0)),
        Some(Size::new(100.0, 50.0)),
        true,
        Slot::Right,
    );
    log.take();
    v.take_requests();

    // Finger moves right: content further left is requested.
    v.on_pointer(&pointer(PointerAction::Down, 10.0, 50.0, t0));
    v.on_pointer(&pointer(PointerAction::Move, 50.0, 50.0, t0 + Duration::from_millis(16)));
    assert_eq!(v.active_slot(), Slot::Right);

    v.on_pointer(&pointer(PointerAction::Move, 90.0, 50.0, t0 + Duration::from_millis(32)));
    assert_eq!(v.active_slot(), Slot::Left);
    assert_eq!(log.take(), vec![Heard::Bitmap(Some(Size::new(100.0, 50.0)))]);
    assert!(v.take_requests().contains(HostRequests::LAYOUT));

    // Dragging back the other way in the same gesture does not switch again.
    v.on_pointer(&pointer(PointerAction::Move, -80.0, 50.0, t0 + Duration::from_millis(48)));
    assert_eq!(v.active_slot(), Slot::Left);

    v.on_pointer(&pointer(PointerAction::Up, -80.0, 50.0, t0 + Duration::from_millis(64)));
    v.on_pointer(&pointer(PointerAction::Down, 90.0, 50.0, t0 + Duration::from_millis(200)));
    v.on_pointer(&pointer(PointerAction::Move, 5.0, 50.0, t0 + Duration::from_millis(216)));
    assert_eq!(v.active_slot(), Slot::Right);
}

#[test]
fn edge_drag_without_other_slot_is_blocked() {
    let t0 = Instant::now();
    let (mut v, log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    assert!(!v.can_scroll(1.0));
    assert!(!v.can_scroll(-1.0));

    v.on_pointer(&pointer(PointerAction::Down, 10.0, 50.0, t0));
    v.on_pointer(&pointer(PointerAction::Move, 95.0, 50.0, t0 + Duration::from_millis(16)));
    assert_eq!(v.active_slot(), Slot::Right);
    assert!(log.take().is_empty());
}

#[test]
fn exact_fit_can_scroll_only_toward_populated_slot() {
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.on_layout(Size::new(100.0, 100.0));
    v.set_images(
        Some(Size::new(100.0, 100.0)),
        Some(Size::new(100.0, 100.0)),
        true,
        Slot::Left,
    );
    assert!(v.can_scroll(1.0));
    assert!(!v.can_scroll(-1.0));
}

#[test]
fn zoomed_image_has_room_to_scroll() {
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.zoom_to(2.0);
    assert!(v.can_scroll(1.0));
    assert!(v.can_scroll(-1.0));
    v.pan_by(Vec2::new(500.0, 0.0));
    assert!(!v.can_scroll(-1.0));
}

#[test]
fn double_tap_claimed_by_listener_does_not_zoom() {
    let t0 = Instant::now();
    let log = Log {
        claim_double_tap: true,
        ..Log::default()
    };
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.set_listener(log.clone());
    v.on_layout(Size::new(100.0, 100.0));
    v.set_image(Some(Size::new(100.0, 100.0)), true);
    v.zoom_to(2.0);
    log.take();

    assert!(v.on_double_tap(Point::new(30.0, 30.0), t0));
    assert_eq!(log.take(), vec![Heard::DoubleTap]);
    assert!(!v.is_animating());
    assert!((v.scale() - 2.0).abs() < EPS);
}

#[test]
fn step_zoom_double_taps_cycle_up_then_reset() {
    let mut now = Instant::now();
    let (mut v, _log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.set_double_tap_policy(StepZoom::default());
    let max = v.max_zoom();
    assert!((max - 3.0).abs() < EPS);

    let mut seen = Vec::new();
    for _ in 0..4 {
        v.on_double_tap(Point::new(50.0, 50.0), now);
        now = settle(&mut v, now);
        seen.push(v.scale());
    }
    let expected = [2.0, 3.0, 1.0, 2.0];
    for (got, want) in seen.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{seen:?}");
    }
}

#[test]
fn long_press_reaches_listener_unless_pinching() {
    let (mut v, log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.on_long_press(Point::new(10.0, 10.0));
    assert_eq!(log.take(), vec![Heard::LongPress]);

    v.on_scale_begin(Point::new(50.0, 50.0));
    log.take();
    v.on_long_press(Point::new(10.0, 10.0));
    assert!(log.take().is_empty());
}

#[test]
fn dispose_makes_everything_inert() {
    let t0 = Instant::now();
    let (mut v, log) = view_with_log(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    v.zoom_to(2.0);
    v.scroll_by(Vec2::new(30.0, 0.0), Duration::from_millis(300), t0);
    v.dispose();
    log.take();

    assert!(!v.tick(t0 + Duration::from_millis(100)));
    assert!(!v.on_pointer(&pointer(PointerAction::Down, 1.0, 1.0, t0)));
    assert!(!v.on_scale_begin(Point::ZERO));
    assert!(!v.on_double_tap(Point::ZERO, t0));
    assert!(!v.go_left_image());
    assert_eq!(v.set_image(Some(Size::new(10.0, 10.0)), true), Assignment::Ignored);
    v.on_layout(Size::new(300.0, 300.0));

    assert!(v.image().is_none());
    assert!(v.bitmap_rect().is_none());
    assert!(v.take_requests().is_empty());
    assert!(log.take().is_empty());
}
