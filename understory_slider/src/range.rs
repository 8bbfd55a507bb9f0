// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection with two ordered handles.
//!
//! ## Usage
//!
//! 1) Create a [`RangeController`] with the slider bounds and optional step.
//! 2) On each drag move of a handle, call [`RangeController::on_drag`] with the
//!    pointer position along the handle travel and the host-owned [`Selection`].
//! 3) On release or cancellation, call [`RangeController::on_drag_end`].
//! 4) When the bounds change outside a gesture, call [`RangeController::set_bounds`].
//!
//! The first move of a gesture freezes the current selection as the drag
//! anchor. Every later move constrains the moving handle against the anchor's
//! opposite endpoint, never against the live value, so the two handles cannot
//! cross and the resting handle cannot drift.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::{Handle, RangeController, Selection, SliderBounds, TrackGeometry};
//!
//! let bounds = SliderBounds::new(0.0, 100.0).unwrap();
//! let geometry = TrackGeometry::new(120.0, 20.0); // 100px of travel
//! let mut controller = RangeController::new(bounds, Some(10.0));
//! let mut selection = Selection::new(20.0, 80.0);
//!
//! // Drag the lower handle well past the upper one.
//! controller.on_drag(Handle::Lower, 95.0, &geometry, &mut selection);
//! assert_eq!(selection, Selection::new(70.0, 80.0));
//!
//! controller.on_drag_end(Handle::Lower);
//! assert!(!controller.is_editing());
//! ```

use crate::bounds::{SliderBounds, effective_step};
use crate::feedback::{EditingTracker, SliderEvent, SliderEvents};
use crate::geometry::TrackGeometry;
use crate::mapping::offset_to_value;

/// Minimum handle separation without a step, as a fraction of the bounds span.
pub const MIN_GAP_FRACTION: f64 = 1e-4;

/// A closed interval selected by a range slider, owned by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Selection {
    /// Lower endpoint.
    pub lower: f64,
    /// Upper endpoint.
    pub upper: f64,
}

impl Selection {
    /// Creates a selection. No ordering or bounds are enforced here.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns the endpoint controlled by `handle`.
    #[must_use]
    pub const fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Lower => self.lower,
            Handle::Upper => self.upper,
        }
    }
}

/// One of the two handles of a range slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The handle controlling [`Selection::lower`].
    Lower,
    /// The handle controlling [`Selection::upper`].
    Upper,
}

impl Handle {
    /// Returns the other handle.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// Per-handle gesture state: idle, or dragging with a frozen anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    anchor: Option<Selection>,
}

impl DragSession {
    /// Returns `true` while a drag of this handle is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the selection captured when the current drag started.
    #[must_use]
    pub fn anchor(&self) -> Option<Selection> {
        self.anchor
    }

    /// Enters the dragging state, capturing `current` only if no anchor exists yet.
    fn begin(&mut self, current: Selection) -> Selection {
        *self.anchor.get_or_insert(current)
    }

    /// Returns to idle. Returns `true` if a drag was in progress.
    fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }
}

/// Clamps both endpoints into `bounds`, then restores `lower <= upper`.
///
/// This is the only place a selection's order is repaired outside a drag.
/// Clamping can collapse a selection to a single point (for example
/// `90..=95` into `0..=50` gives `50..=50`); that is accepted here, since the
/// strict gap only applies to drag results. The function is idempotent.
#[must_use]
pub fn clamp_selection_to_bounds(selection: Selection, bounds: &SliderBounds) -> Selection {
    let a = bounds.clamp(selection.lower);
    let b = bounds.clamp(selection.upper);
    Selection {
        lower: a.min(b),
        upper: a.max(b),
    }
}

/// Drives the two handles of a range slider through drag gestures.
///
/// The controller holds the bounds, the step and one [`DragSession`] per
/// handle. The selection itself stays with the host and is passed in by
/// mutable reference on every call.
#[derive(Clone, Debug)]
pub struct RangeController {
    bounds: SliderBounds,
    step: Option<f64>,
    lower: DragSession,
    upper: DragSession,
    editing: EditingTracker,
}

impl RangeController {
    /// Creates an idle controller. A non-positive step means continuous.
    #[must_use]
    pub fn new(bounds: SliderBounds, step: Option<f64>) -> Self {
        Self {
            bounds,
            step: effective_step(step),
            lower: DragSession::default(),
            upper: DragSession::default(),
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

    /// Minimum separation enforced between the handles during a drag.
    ///
    /// The step when set, otherwise [`MIN_GAP_FRACTION`] of the bounds span.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.step.unwrap_or(self.bounds.span() * MIN_GAP_FRACTION)
    }

    /// Returns the gesture state of `handle`.
    #[must_use]
    pub fn session(&self, handle: Handle) -> &DragSession {
        match handle {
            Handle::Lower => &self.lower,
            Handle::Upper => &self.upper,
        }
    }

    /// Returns `true` while either handle is being dragged.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.lower.is_active() || self.upper.is_active()
    }

    /// Handles a drag move of `handle` to `pointer_x` along the handle travel.
    ///
    /// On the first move of a gesture the current selection, clamped into
    /// the bounds, becomes the anchor. The moving endpoint is mapped through
    /// [`offset_to_value`] and kept at least [`gap`](Self::gap) away from the
    /// anchor's opposite endpoint, which is published unchanged. The result is
    /// written to `selection`.
    pub fn on_drag(
        &mut self,
        handle: Handle,
        pointer_x: f64,
        geometry: &TrackGeometry,
        selection: &mut Selection,
    ) -> SliderEvents {
        let mut events = SliderEvents::new();
        let current = clamp_selection_to_bounds(*selection, &self.bounds);
        let session = self.session_mut(handle);
        let starting = !session.is_active();
        let anchor = session.begin(current);
        if starting {
            debug_event!(
                ?handle,
                lower = anchor.lower,
                upper = anchor.upper,
                "range slider drag started"
            );
        }
        self.editing.update(true, &mut events);

        let proposed = offset_to_value(pointer_x, &self.bounds, geometry, self.step);
        let gap = self.gap();
        let next = match handle {
            Handle::Lower => Selection {
                lower: proposed.min(anchor.upper - gap).max(self.bounds.lower()),
                upper: anchor.upper,
            },
            Handle::Upper => Selection {
                lower: anchor.lower,
                upper: proposed.max(anchor.lower + gap).min(self.bounds.upper()),
            },
        };
        let next = clamp_selection_to_bounds(next, &self.bounds);

        if next != *selection {
            *selection = next;
            events.push(SliderEvent::ValueChanged);
        }
        events
    }

    /// Ends the drag of `handle`, discarding its anchor.
    ///
    /// Cancellation is handled the same way. Ending a handle that is not
    /// being dragged is a no-op.
    pub fn on_drag_end(&mut self, handle: Handle) -> SliderEvents {
        let mut events = SliderEvents::new();
        if self.session_mut(handle).end() {
            debug_event!(?handle, "range slider drag ended");
        }
        let editing = self.is_editing();
        self.editing.update(editing, &mut events);
        events
    }

    /// Replaces the bounds and repairs `selection` to fit them.
    ///
    /// Anchors of an in-progress drag are repaired as well so that the rest
    /// of the gesture is constrained by the new bounds. Returns `true` if
    /// `selection` was changed.
    pub fn set_bounds(&mut self, bounds: SliderBounds, selection: &mut Selection) -> bool {
        self.bounds = bounds;
        for session in [&mut self.lower, &mut self.upper] {
            if let Some(anchor) = session.anchor.as_mut() {
                *anchor = clamp_selection_to_bounds(*anchor, &bounds);
            }
        }
        let repaired = clamp_selection_to_bounds(*selection, &bounds);
        if repaired == *selection {
            return false;
        }
        debug_event!(
            from.lower = selection.lower,
            from.upper = selection.upper,
            to.lower = repaired.lower,
            to.upper = repaired.upper,
            "range selection repaired for new bounds"
        );
        *selection = repaired;
        true
    }

    fn session_mut(&mut self, handle: Handle) -> &mut DragSession {
        match handle {
            Handle::Lower => &mut self.lower,
            Handle::Upper => &mut self.upper,
        }
    }
}
