// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pinch_zoom` crate.
//!
//! These drive `TransformController` through whole gestures the way a host
//! would, and check the committed results against the clamping rules.

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use understory_pinch_zoom::{
    Curve, GestureEvent, Motion, TransformController, TransformUpdate, ZoomConfig, ZoomTransform,
    clamp_transform,
};

fn controller(width: f64, height: f64) -> TransformController {
    let mut c = TransformController::new(ZoomConfig::default());
    c.measure_content(Size::new(width, height));
    c
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "expected {b:?}, got {a:?}"
    );
}

#[test]
fn end_to_end_pinch_and_drag_scenario() {
    let mut c = controller(300.0, 300.0);

    // Under-zoom resets.
    c.on_pinch_changed(0.5);
    c.on_pinch_ended();
    assert_eq!(c.committed_transform(), ZoomTransform::IDENTITY);

    // Zoom to 2x at the origin; already in bounds.
    c.on_pinch_changed(2.0);
    let update = c.on_pinch_ended();
    assert_eq!(update.transform.scale(), Vec2::new(2.0, 2.0));
    assert_eq!(update.transform.translation(), Vec2::ZERO);
    assert_eq!(c.committed_transform(), update.transform);

    // Drag -700 view px is -350 content px before clamping, -300 after.
    let live = c.on_drag_changed(Vec2::new(-700.0, -700.0)).unwrap();
    assert_eq!(live.transform.translation(), Vec2::new(-350.0, -350.0));
    c.on_drag_ended();
    assert_eq!(c.committed_transform().scale(), Vec2::new(2.0, 2.0));
    assert_eq!(
        c.committed_transform().translation(),
        Vec2::new(-300.0, -300.0)
    );
}

#[test]
fn drag_delta_is_scale_invariant() {
    let mut c = controller(1000.0, 1000.0);
    c.on_pinch_changed(4.0);
    c.on_pinch_ended();
    c.on_drag_changed(Vec2::new(-400.0, -400.0));
    c.on_drag_ended();
    let before = c.committed_transform().translation();

    c.on_drag_changed(Vec2::new(-80.0, 60.0));
    c.on_drag_ended();
    let after = c.committed_transform().translation();
    assert_close(after - before, Vec2::new(-20.0, 15.0));
}

#[test]
fn double_tap_toggles_back_to_identity() {
    let mut c = controller(300.0, 200.0);

    let zoom_in = c.on_double_tap();
    c.on_animation_finished();
    let committed = c.committed_transform();
    assert_eq!(committed, zoom_in.transform);
    assert_eq!(committed.scale(), Vec2::new(3.0, 3.0));

    // The content center stays put.
    let center = Point::new(150.0, 100.0);
    let mapped = committed.map_point(center);
    assert_close(mapped.to_vec2(), center.to_vec2());

    c.on_double_tap();
    c.on_animation_finished();
    assert_eq!(c.committed_transform(), ZoomTransform::IDENTITY);
}

#[test]
fn double_tap_from_zoomed_state_resets() {
    let mut c = controller(300.0, 300.0);
    c.on_pinch_changed(1.5);
    c.on_pinch_ended();
    let update = c.on_double_tap();
    assert_eq!(update.transform, ZoomTransform::IDENTITY);
    let transition = update.transition().copied().unwrap();
    assert_eq!(transition.curve, Curve::Linear);
    assert_eq!(transition.duration, Duration::from_millis(150));
}

#[test]
fn simultaneous_pinch_and_drag_share_the_baseline() {
    let mut a = controller(500.0, 500.0);
    a.on_pinch_changed(2.0);
    a.on_drag_changed(Vec2::new(-100.0, -50.0));

    let mut b = controller(500.0, 500.0);
    b.on_drag_changed(Vec2::new(-100.0, -50.0));
    b.on_pinch_changed(2.0);

    assert_eq!(a.current_transform(), b.current_transform());
    assert_eq!(
        a.current_transform(),
        ZoomTransform::uniform(2.0, Vec2::new(-50.0, -25.0))
    );
    // Nothing is committed until a recognizer ends.
    assert_eq!(a.committed_transform(), ZoomTransform::IDENTITY);
}

#[test]
fn drag_continues_smoothly_after_pinch_ends() {
    let mut c = controller(500.0, 500.0);
    c.on_pinch_changed(2.0);
    c.on_drag_changed(Vec2::new(-100.0, 0.0));
    c.on_pinch_ended();
    let committed = c.committed_transform();
    assert_eq!(committed.translation(), Vec2::new(-50.0, 0.0));

    // Same cumulative drag value: nothing moves.
    let same = c.on_drag_changed(Vec2::new(-100.0, 0.0)).unwrap();
    assert_eq!(same.transform, committed);

    // Further movement is applied once.
    let more = c.on_drag_changed(Vec2::new(-140.0, 0.0)).unwrap();
    assert_eq!(more.transform.translation(), Vec2::new(-70.0, 0.0));
    c.on_drag_ended();
    assert!(!c.is_manipulating());
}

#[test]
fn end_handlers_animate_from_the_overshoot() {
    let mut c = controller(300.0, 300.0);
    c.on_pinch_changed(2.0);
    c.on_drag_changed(Vec2::new(100.0, 100.0));
    c.on_drag_ended();
    let update = c.on_pinch_ended();
    match update.motion {
        Motion::Animated(transition) => {
            assert_eq!(transition.curve, Curve::Snap);
            assert_eq!(transition.duration, Duration::from_millis(100));
            assert_eq!(transition.to, update.transform);
        }
        other => panic!("expected an animated snap back, got {other:?}"),
    }
    assert_eq!(c.committed_transform().translation(), Vec2::ZERO);
}

#[test]
fn unmeasured_content_cannot_be_moved() {
    let mut c = TransformController::default();
    c.on_pinch_changed(3.0);
    c.on_drag_changed(Vec2::new(-200.0, -200.0));
    c.on_drag_ended();
    c.on_pinch_ended();
    assert_eq!(
        c.committed_transform(),
        ZoomTransform::uniform(3.0, Vec2::ZERO)
    );
}

#[test]
fn custom_minimum_scale_allows_zooming_out() {
    let config = ZoomConfig::default().with_min_zoom_scale(0.5);
    let mut c = TransformController::new(config);
    c.measure_content(Size::new(300.0, 300.0));

    c.on_pinch_changed(0.75);
    c.on_pinch_ended();
    assert_eq!(c.committed_transform().scale(), Vec2::new(0.75, 0.75));

    c.on_pinch_changed(0.5);
    c.on_pinch_ended();
    assert_eq!(c.committed_transform(), ZoomTransform::IDENTITY);
}

#[test]
fn dispatch_feeds_the_sink() {
    let mut c = TransformController::default();
    let mut updates: Vec<TransformUpdate> = Vec::new();
    let mut sink = |update: &TransformUpdate| updates.push(*update);

    c.dispatch(GestureEvent::Measured(Size::new(200.0, 200.0)), &mut sink);
    c.dispatch(GestureEvent::DoubleTap, &mut sink);
    c.dispatch(GestureEvent::PinchChanged(-1.0), &mut sink);

    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].transform,
        ZoomTransform::uniform(3.0, Vec2::new(-200.0, -200.0))
    );
}

#[test]
fn sampled_frames_follow_the_transition() {
    let mut c = controller(300.0, 300.0);
    let update = c.on_double_tap();
    let transition = update.transition().copied().unwrap();

    let quarter = c.on_animation_frame(0.25).unwrap();
    assert_eq!(quarter, transition.sample(0.25));
    assert_eq!(c.current_transform(), quarter);

    c.on_animation_finished();
    assert_eq!(c.current_transform(), transition.to);
    assert_eq!(c.on_animation_frame(0.5), None);
}

#[test]
fn controller_clamp_matches_free_function() {
    let size = Size::new(640.0, 480.0);
    let mut c = controller(size.width, size.height);
    c.on_pinch_changed(1.75);
    c.on_drag_changed(Vec2::new(-2000.0, 300.0));
    let live = c.current_transform();
    c.on_drag_ended();
    c.on_pinch_ended();
    assert_eq!(c.committed_transform(), clamp_transform(live, size, 1.0));
}
