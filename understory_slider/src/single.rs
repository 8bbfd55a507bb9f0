// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-value slider gestures.
//!
//! ```
//! use understory_slider::{SliderBounds, SliderController, SliderEvent, TrackGeometry};
//!
//! let mut controller = SliderController::new(SliderBounds::new(0.0, 100.0).unwrap(), Some(5.0));
//! let geometry = TrackGeometry::new(220.0, 20.0);
//! let mut value = 0.0;
//!
//! let events = controller.on_drag(101.0, &geometry, &mut value);
//! assert_eq!(value, 50.0);
//! assert!(events.contains(&SliderEvent::EditingChanged(true)));
//!
//! let events = controller.on_drag_end();
//! assert_eq!(events.as_slice(), &[SliderEvent::EditingChanged(false)]);
//! ```

use crate::bounds::{SliderBounds, effective_step};
use crate::feedback::{EditingTracker, SliderEvent, SliderEvents};
use crate::geometry::TrackGeometry;
use crate::mapping::offset_to_value;

/// Drives a single-handle slider through drag gestures.
///
/// The value stays with the host and is passed in by mutable reference.
#[derive(Clone, Debug)]
pub struct SliderController {
    bounds: SliderBounds,
    step: Option<f64>,
    editing: EditingTracker,
}

impl SliderController {
    /// Creates an idle controller. A non-positive step means continuous.
    #[must_use]
    pub fn new(bounds: SliderBounds, step: Option<f64>) -> Self {
        Self {
            bounds,
            step: effective_step(step),
            editing: EditingTracker::default(),
        }
    }

    /// Returns the current bounds.
    #[must_use]
    pub fn bounds(&self) -> SliderBounds {
        self.bounds
    }

    /// Returns the effective step, if any.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_editing()
    }

    /// Handles a drag move to `pointer_x` along the handle travel and
    /// publishes the mapped value into `value`.
    pub fn on_drag(
        &mut self,
        pointer_x: f64,
        geometry: &TrackGeometry,
        value: &mut f64,
    ) -> SliderEvents {
        let mut events = SliderEvents::new();
        if !self.editing.is_editing() {
            debug_event!(value = *value, "slider drag started");
        }
        self.editing.update(true, &mut events);

        let next = offset_to_value(pointer_x, &self.bounds, geometry, self.step);
        if next != *value {
            *value = next;
            events.push(SliderEvent::ValueChanged);
        }
        events
    }

    /// Ends the current drag. Cancellation is handled the same way.
    pub fn on_drag_end(&mut self) -> SliderEvents {
        let mut events = SliderEvents::new();
        if self.editing.is_editing() {
            debug_event!("slider drag ended");
        }
        self.editing.update(false, &mut events);
        events
    }

    /// Replaces the bounds and clamps `value` into them.
    ///
    /// Returns `true` if `value` was changed.
    pub fn set_bounds(&mut self, bounds: SliderBounds, value: &mut f64) -> bool {
        self.bounds = bounds;
        let clamped = bounds.clamp(*value);
        if clamped == *value {
            return false;
        }
        debug_event!(from = *value, to = clamped, "slider value clamped to new bounds");
        *value = clamped;
        true
    }
}
