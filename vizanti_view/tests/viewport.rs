// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vizanti_view` crate.
//!
//! These drive a `Viewport` through the same event sequences a host UI would
//! deliver and check the geometric guarantees: fixed-point zoom, clamping
//! without drift, linear panning and clean gesture hand-offs.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size};
use vizanti_view::{
    GestureState, InputEvent, MAX_SCALE, MIN_SCALE, MemoryScaleStore, ScaleStore, SizeFn,
    Viewport,
};

const EPS: f64 = 1e-9;

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < EPS * a.x.abs().max(1.0) && (a.y - b.y).abs() < EPS * a.y.abs().max(1.0),
        "{a:?} != {b:?}"
    );
}

fn viewport(scale: f64) -> Viewport<MemoryScaleStore> {
    Viewport::new(MemoryScaleStore::new(scale), Size::new(1000.0, 1000.0))
}

#[test]
fn end_to_end_zoom_example() {
    let mut vp = viewport(1.0);
    let anchor = Point::new(600.0, 500.0);
    assert_eq!(vp.screen_to_map(anchor), Point::new(100.0, 0.0));

    vp.on_zoom(anchor, 2.0);

    assert_eq!(vp.center(), Point::new(50.0, 0.0));
    assert_eq!(vp.scale(), 2.0);
    assert_eq!(vp.map_to_screen(Point::new(100.0, 0.0)), anchor);
}

#[test]
fn roundtrip_after_navigation() {
    let mut vp = viewport(3.0);
    vp.on_pan_start(Point::new(100.0, 100.0));
    vp.on_pan_move(Point::new(-250.0, 400.0));
    vp.on_pan_end();
    vp.on_zoom(Point::new(20.0, 980.0), 7.5);

    for q in [
        Point::new(0.0, 0.0),
        Point::new(999.0, 1.0),
        Point::new(333.3, 666.6),
        Point::new(-10.0, 1200.0),
    ] {
        assert_close(vp.map_to_screen(vp.screen_to_map(q)), q);
    }
}

#[test]
fn zoom_keeps_anchor_fixed_in_both_directions() {
    let anchor = Point::new(873.0, 91.0);
    for ratio in [1.8, 0.6] {
        let mut vp = viewport(40.0);
        let map_point = vp.screen_to_map(anchor);
        assert!(vp.on_zoom(anchor, ratio));
        assert_close(vp.map_to_screen(map_point), anchor);
    }
}

#[test]
fn scale_never_leaves_bounds() {
    let mut vp = viewport(5.0);
    let cursor = Point::new(250.0, 750.0);

    for _ in 0..500 {
        vp.on_wheel(cursor, -1.0);
        assert!(vp.scale() <= MAX_SCALE);
    }
    assert_eq!(vp.scale(), MAX_SCALE);

    for _ in 0..1000 {
        vp.on_wheel(cursor, 1.0);
        assert!(vp.scale() >= MIN_SCALE);
    }
    assert_eq!(vp.scale(), MIN_SCALE);
}

#[test]
fn zooming_in_at_max_scale_leaves_center_alone() {
    let mut vp = viewport(MAX_SCALE);
    vp.on_pan_start(Point::new(0.0, 0.0));
    vp.on_pan_move(Point::new(-37.0, 12.0));
    vp.on_pan_end();
    let center = vp.center();

    for _ in 0..20 {
        vp.on_wheel(Point::new(10.0, 10.0), -1.0);
        vp.on_zoom(Point::new(900.0, 900.0), 3.0);
    }
    assert_eq!(vp.center(), center);
    assert_eq!(vp.settings().saves(), 0);
}

#[test]
fn pan_reference_is_drag_start() {
    let mut vp = viewport(8.0);
    let c0 = vp.center();
    let p0 = Point::new(500.0, 500.0);

    vp.on_pan_start(p0);
    let p1 = Point::new(420.0, 540.0);
    vp.on_pan_move(p1);
    assert_close(vp.center(), c0 + (p0 - p1) / 8.0);

    let p2 = Point::new(600.0, 300.0);
    vp.on_pan_move(p2);
    assert_close(vp.center(), c0 + (p0 - p2) / 8.0);
}

#[test]
fn pinch_ratios_rebaseline_each_move() {
    let mut vp = viewport(10.0);
    let left = Point::new(400.0, 500.0);

    vp.on_touch_start(&[left, Point::new(500.0, 500.0)]);
    vp.on_touch_move(&[left, Point::new(600.0, 500.0)]);
    assert!((vp.scale() - 20.0).abs() < EPS);

    // 200 -> 300 is a ratio of 1.5, not 3.
    vp.on_touch_move(&[left, Point::new(700.0, 500.0)]);
    assert!((vp.scale() - 30.0).abs() < EPS);
}

#[test]
fn pinch_keeps_pinch_center_fixed() {
    let mut vp = viewport(10.0);
    let a = Point::new(300.0, 200.0);
    let b = Point::new(500.0, 400.0);
    vp.on_touch_start(&[a, b]);

    let (a2, b2) = (Point::new(250.0, 150.0), Point::new(550.0, 450.0));
    let mid = a2.midpoint(b2);
    let map_point = vp.screen_to_map(mid);
    vp.on_touch_move(&[a2, b2]);

    assert_close(vp.map_to_screen(map_point), mid);
}

#[test]
fn lifting_a_finger_starts_a_fresh_pan() {
    let mut vp = viewport(4.0);
    vp.on_touch_start(&[Point::new(400.0, 500.0)]);
    vp.on_touch_start(&[Point::new(400.0, 500.0), Point::new(600.0, 500.0)]);
    vp.on_touch_move(&[Point::new(350.0, 520.0), Point::new(650.0, 480.0)]);
    let scale = vp.scale();

    vp.on_touch_end(&[Point::new(650.0, 480.0)]);
    let center = vp.center();

    for (dx, dy) in [(10.0, 0.0), (0.0, -10.0)] {
        vp.on_touch_move(&[Point::new(650.0 + dx, 480.0 + dy)]);
        assert_close(vp.center(), Point::new(center.x - dx / scale, center.y - dy / scale));
    }
}

#[test]
fn three_touches_freeze_the_view() {
    let mut vp = viewport(4.0);
    let three = [
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(300.0, 100.0),
    ];
    vp.on_touch_start(&three);
    let response = vp.on_touch_move(&[
        Point::new(0.0, 0.0),
        Point::new(400.0, 100.0),
        Point::new(900.0, 900.0),
    ]);

    assert!(!response.changed);
    assert!(!response.capture);
    assert_eq!(vp.revision(), 0);
    assert_eq!(*vp.gesture(), GestureState::Idle);
}

#[test]
fn coincident_pinch_touches_do_not_poison_scale() {
    let mut vp = viewport(10.0);
    let p = Point::new(500.0, 500.0);
    vp.on_touch_start(&[p, p]);

    vp.on_touch_move(&[p, Point::new(520.0, 500.0)]);
    assert_eq!(vp.scale(), 10.0);

    vp.on_touch_move(&[p, Point::new(540.0, 500.0)]);
    assert!(vp.scale().is_finite());
    assert!((vp.scale() - 20.0).abs() < EPS);
}

#[test]
fn mouse_and_wheel_via_handle() {
    let mut vp = viewport(2.0);
    let events = [
        InputEvent::PointerDown(Point::new(500.0, 500.0)),
        InputEvent::PointerMove(Point::new(480.0, 500.0)),
        InputEvent::PointerMove(Point::new(460.0, 500.0)),
        InputEvent::PointerUp,
        InputEvent::PointerMove(Point::new(0.0, 0.0)),
        InputEvent::Wheel {
            position: Point::new(500.0, 500.0),
            delta_y: -53.0,
        },
    ];
    let changed = events
        .into_iter()
        .filter(|event| vp.handle(*event).changed)
        .count();

    assert_eq!(changed, 3);
    assert_eq!(vp.revision(), 3);
    assert_close(vp.center(), Point::new(20.0, 0.0));
    assert!((vp.scale() - 2.1).abs() < EPS);
}

#[test]
fn listeners_fire_once_per_change() {
    let mut vp = viewport(2.0);
    let calls = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&calls);
    vp.subscribe(move || seen.set(seen.get() + 1));

    vp.on_wheel(Point::new(1.0, 1.0), 1.0);
    vp.on_pan_start(Point::ORIGIN);
    vp.on_pan_move(Point::new(5.0, 5.0));
    vp.on_pan_move(Point::new(6.0, 5.0));
    vp.on_pan_end();

    assert_eq!(calls.get(), 3);
}

#[test]
fn resize_applies_without_invalidation() {
    let width = Rc::new(Cell::new(800.0));
    let w = Rc::clone(&width);
    let vp = Viewport::new(
        MemoryScaleStore::new(2.0),
        SizeFn(move || Size::new(w.get(), 600.0)),
    );
    assert_eq!(vp.map_to_screen(Point::ORIGIN), Point::new(400.0, 300.0));

    width.set(1200.0);
    assert_eq!(vp.map_to_screen(Point::ORIGIN), Point::new(600.0, 300.0));
    assert_eq!(vp.screen_to_map(Point::new(600.0, 300.0)), Point::ORIGIN);
}

/// Store whose saves always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    scale: f64,
    attempts: usize,
}

impl ScaleStore for ReadOnlyStore {
    type Error = &'static str;

    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err("read-only")
    }
}

#[test]
fn save_failures_do_not_interrupt_zoom() {
    let store = ReadOnlyStore {
        scale: 10.0,
        attempts: 0,
    };
    let mut vp = Viewport::new(store, Size::new(640.0, 480.0));

    assert!(vp.on_zoom(Point::new(320.0, 240.0), 2.0));
    assert!(vp.on_zoom(Point::new(320.0, 240.0), 2.0));

    assert_eq!(vp.scale(), 40.0);
    let (store, _) = vp.into_parts();
    assert_eq!(store.attempts, 2);
    assert_eq!(store.scale, 40.0);
}

#[test]
fn borrowed_store_sees_persisted_scale() {
    let mut store = MemoryScaleStore::new(3.0);
    {
        let mut vp = Viewport::new(&mut store, Size::new(100.0, 100.0));
        vp.on_wheel(Point::new(50.0, 50.0), -1.0);
    }
    assert!((store.scale() - 3.15).abs() < EPS);
    assert_eq!(store.saves(), 1);
}
