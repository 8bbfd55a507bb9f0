// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_slider` crate.
//!
//! These drive the public API the way a host would: layout passes feeding
//! geometry, drag events feeding pointer positions, and host-owned values
//! and selections receiving the results.

use understory_slider::{
    Handle, OffsetTarget, RangeController, RangeLayout, Selection, SliderBounds,
    SliderController, SliderEvent, SliderStyle, TrackGeometry, clamp_selection_to_bounds,
    offset_to_value, range_description, step_markers, value_description, value_to_offset,
};

fn bounds(lower: f64, upper: f64) -> SliderBounds {
    SliderBounds::new(lower, upper).unwrap()
}

#[test]
fn end_to_end_midpoint() {
    let geometry = TrackGeometry::new(220.0, 20.0);
    assert_eq!(offset_to_value(100.0, &bounds(0.0, 1.0), &geometry, None), 0.5);
}

#[test]
fn round_trip_without_step() {
    let b = bounds(-40.0, 260.0);
    let geometry = TrackGeometry::new(517.0, 31.0);
    for i in 0..=100 {
        let value = b.value_at(f64::from(i) / 100.0);
        let offset = value_to_offset(value, &b, &geometry, OffsetTarget::Handle);
        let back = offset_to_value(offset, &b, &geometry, None);
        let tolerance = 1e-9 * value.abs().max(1.0);
        assert!(
            (back - value).abs() <= tolerance,
            "value {value} came back as {back}"
        );
    }
}

#[test]
fn boundary_clamp_with_and_without_step() {
    let b = bounds(0.0, 100.0);
    let geometry = TrackGeometry::new(300.0, 20.0);
    for step in [None, Some(10.0), Some(25.0)] {
        assert_eq!(offset_to_value(-0.5, &b, &geometry, step), 0.0);
        assert_eq!(offset_to_value(280.5, &b, &geometry, step), 100.0);
    }
}

#[test]
fn step_quantization_snaps_to_multiples() {
    let b = bounds(0.0, 100.0);
    let geometry = TrackGeometry::new(300.0, 20.0);
    let travel = geometry.travel();
    assert_eq!(offset_to_value(0.46 * travel, &b, &geometry, Some(10.0)), 50.0);

    for px in 0..=280 {
        let v = offset_to_value(f64::from(px), &b, &geometry, Some(10.0));
        assert_eq!(v % 10.0, 0.0, "pointer {px} produced off-grid value {v}");
    }
}

#[test]
fn lower_handle_never_crosses_upper() {
    let geometry = TrackGeometry::new(120.0, 20.0);
    let mut controller = RangeController::new(bounds(0.0, 100.0), Some(10.0));
    let mut selection = Selection::new(20.0, 80.0);

    for px in [10.0, 40.0, 69.0, 71.0, 76.0, 90.0, 150.0, 60.0] {
        controller.on_drag(Handle::Lower, px, &geometry, &mut selection);
        assert!(
            selection.lower + 10.0 <= selection.upper,
            "crossed at pointer {px}: {selection:?}"
        );
    }
    assert_eq!(selection, Selection::new(60.0, 80.0));
}

#[test]
fn anchor_keeps_resting_handle_fixed() {
    let geometry = TrackGeometry::new(120.0, 20.0);
    let mut controller = RangeController::new(bounds(0.0, 100.0), Some(10.0));
    let mut selection = Selection::new(20.0, 80.0);

    // Includes moves whose raw value exceeds `upper - step`.
    for px in [25.0, 55.0, 74.0, 79.0, 88.0, 100.0, 35.0] {
        let upper_before = selection.upper;
        controller.on_drag(Handle::Lower, px, &geometry, &mut selection);
        assert_eq!(selection.upper, upper_before, "upper drifted at pointer {px}");
        assert_eq!(selection.upper, 80.0);
    }
    controller.on_drag_end(Handle::Lower);
    assert_eq!(selection, Selection::new(40.0, 80.0));
}

#[test]
fn host_writes_during_drag_do_not_move_anchor() {
    let geometry = TrackGeometry::new(120.0, 20.0);
    let mut controller = RangeController::new(bounds(0.0, 100.0), Some(10.0));
    let mut selection = Selection::new(20.0, 80.0);

    controller.on_drag(Handle::Lower, 30.0, &geometry, &mut selection);
    // Something else nudges the bound state mid-gesture.
    selection.upper = 35.0;
    controller.on_drag(Handle::Lower, 60.0, &geometry, &mut selection);
    assert_eq!(selection, Selection::new(60.0, 80.0));
}

#[test]
fn bounds_change_repair() {
    assert_eq!(
        clamp_selection_to_bounds(Selection::new(-5.0, 150.0), &bounds(0.0, 100.0)),
        Selection::new(0.0, 100.0)
    );
    assert_eq!(
        clamp_selection_to_bounds(Selection::new(90.0, 95.0), &bounds(0.0, 50.0)),
        Selection::new(50.0, 50.0)
    );
}

#[test]
fn clamp_is_idempotent() {
    let b = bounds(0.0, 50.0);
    for sel in [
        Selection::new(-5.0, 150.0),
        Selection::new(90.0, 95.0),
        Selection::new(40.0, 10.0),
        Selection::new(10.0, 20.0),
    ] {
        let once = clamp_selection_to_bounds(sel, &b);
        let twice = clamp_selection_to_bounds(once, &b);
        assert_eq!(once, twice);
    }
}

#[test]
fn host_dispatch_loop_with_style() {
    let style = SliderStyle::default()
        .with_handle_size(20.0)
        .with_steps_shown(true)
        .with_haptic_feedback(true);
    let b = bounds(0.0, 100.0);
    let step = Some(25.0);
    let geometry = style.geometry(220.0);
    let mut controller = RangeController::new(b, step);
    let mut selection = Selection::new(0.0, 100.0);
    let mut haptics = 0;
    let mut editing_log = Vec::new();

    let gesture = [
        (Handle::Upper, 190.0),
        (Handle::Upper, 160.0),
        (Handle::Upper, 158.0),
    ];
    for (handle, x) in gesture {
        let travel_x = geometry.travel_x(kurbo::Point::new(x, 10.0));
        for event in controller.on_drag(handle, travel_x, &geometry, &mut selection) {
            if style.plays_haptic(event) {
                haptics += 1;
            }
            if let SliderEvent::EditingChanged(editing) = event {
                editing_log.push(editing);
            }
        }
    }
    for event in controller.on_drag_end(Handle::Upper) {
        if style.plays_haptic(event) {
            haptics += 1;
        }
        if let SliderEvent::EditingChanged(editing) = event {
            editing_log.push(editing);
        }
    }

    assert_eq!(selection, Selection::new(0.0, 75.0));
    assert_eq!(editing_log, [true, false]);
    // Editing on, one value change (100 -> 75), editing off.
    assert_eq!(haptics, 3);

    let layout = RangeLayout::compute(selection, &b, &geometry);
    assert_eq!(layout.upper_handle_offset, 150.0);
    assert_eq!(layout.fill_trailing_inset, 60.0);

    let markers: Vec<f64> = step_markers(&b, style.marker_step(step), &geometry).collect();
    assert_eq!(markers.len(), 5);
    assert_eq!(range_description(selection), "0 to 75");
}

#[test]
fn single_slider_session() {
    let geometry = TrackGeometry::new(220.0, 20.0);
    let mut controller = SliderController::new(bounds(0.0, 10.0), Some(1.0));
    let mut value = 3.0;

    let events = controller.on_drag(141.0, &geometry, &mut value);
    assert_eq!(value, 7.0);
    assert_eq!(
        events.as_slice(),
        &[SliderEvent::EditingChanged(true), SliderEvent::ValueChanged]
    );
    assert_eq!(value_description(value), "7");

    let events = controller.on_drag_end();
    assert_eq!(events.as_slice(), &[SliderEvent::EditingChanged(false)]);
}
