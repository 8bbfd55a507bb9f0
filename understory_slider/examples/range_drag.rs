// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider drag, headless.
//!
//! Play back a scripted pointer gesture against a `RangeController` the way a
//! host's input layer would, printing the published selection, the handle
//! layout and the feedback the host would emit.
//!
//! Run:
//! - `cargo run -p understory_slider --example range_drag`

use kurbo::Point;
use understory_slider::{
    Handle, RangeController, RangeLayout, Selection, SliderBounds, SliderEvent, SliderStyle,
    range_description, step_markers,
};

fn main() {
    let style = SliderStyle::default()
        .with_steps_shown(true)
        .with_haptic_feedback(true);
    let Ok(bounds) = SliderBounds::new(0.0, 100.0) else {
        return;
    };
    let step = Some(5.0);
    let mut controller = RangeController::new(bounds, step);
    let mut selection = Selection::new(0.0, 50.0);

    // The host laid the track out 328px wide: 300px of handle travel.
    let geometry = style.geometry(328.0);
    let markers: Vec<f64> = step_markers(&bounds, style.marker_step(step), &geometry).collect();
    if let (Some(first), Some(last)) = (markers.first(), markers.last()) {
        println!("{} step markers from x={first:.1} to x={last:.1}", markers.len());
    }

    // Grab the lower handle and sweep it right, past the upper handle.
    let gesture = [20.0, 80.0, 140.0, 200.0, 260.0, 320.0];
    for x in gesture {
        let travel_x = geometry.travel_x(Point::new(x, 14.0));
        let events = controller.on_drag(Handle::Lower, travel_x, &geometry, &mut selection);
        report(&style, &events);
        let layout = RangeLayout::compute(selection, &bounds, &geometry);
        println!(
            "pointer x={x:>5.1} -> {} (handles at {:.1} / {:.1})",
            range_description(selection),
            layout.lower_handle_offset,
            layout.upper_handle_offset,
        );
    }
    report(&style, &controller.on_drag_end(Handle::Lower));

    // The bounds shrink underneath the selection.
    if let Ok(narrow) = SliderBounds::new(0.0, 30.0) {
        if controller.set_bounds(narrow, &mut selection) {
            println!("bounds changed -> {}", range_description(selection));
        }
    }
}

fn report(style: &SliderStyle, events: &[SliderEvent]) {
    for &event in events {
        match event {
            SliderEvent::EditingChanged(editing) => println!("  editing: {editing}"),
            SliderEvent::ValueChanged => {}
        }
        if style.plays_haptic(event) {
            println!("  * haptic tick");
        }
    }
}
