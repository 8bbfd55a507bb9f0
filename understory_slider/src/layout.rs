// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layout-pass positions for handles, the filled track and step markers.
//!
//! These helpers bundle the [`value_to_offset`] calls a renderer makes for
//! one frame. Values and selections are clamped into the bounds first, so a
//! host that wrote an out-of-range value still gets a drawable layout.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

use crate::bounds::{SliderBounds, effective_step};
use crate::geometry::TrackGeometry;
use crate::mapping::{OffsetTarget, value_to_offset};
use crate::range::{Selection, clamp_selection_to_bounds};

/// Layout of a single-value slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleLayout {
    /// Leading edge of the handle.
    pub handle_offset: f64,
    /// Inset of the filled track from the trailing edge.
    pub fill_trailing_inset: f64,
}

impl SingleLayout {
    /// Computes the layout for `value`.
    #[must_use]
    pub fn compute(value: f64, bounds: &SliderBounds, geometry: &TrackGeometry) -> Self {
        let value = bounds.clamp(value);
        Self {
            handle_offset: value_to_offset(value, bounds, geometry, OffsetTarget::Handle),
            fill_trailing_inset: value_to_offset(
                value,
                bounds,
                geometry,
                OffsetTarget::TrailingTrim,
            ),
        }
    }
}

/// Layout of a range slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeLayout {
    /// Leading edge of the lower handle.
    pub lower_handle_offset: f64,
    /// Leading edge of the upper handle.
    pub upper_handle_offset: f64,
    /// Inset of the filled track from the leading edge (centre of the lower handle).
    pub fill_leading_inset: f64,
    /// Inset of the filled track from the trailing edge (centre of the upper handle).
    pub fill_trailing_inset: f64,
}

impl RangeLayout {
    /// Computes the layout for `selection`.
    #[must_use]
    pub fn compute(selection: Selection, bounds: &SliderBounds, geometry: &TrackGeometry) -> Self {
        let Selection { lower, upper } = clamp_selection_to_bounds(selection, bounds);
        Self {
            lower_handle_offset: value_to_offset(lower, bounds, geometry, OffsetTarget::Handle),
            upper_handle_offset: value_to_offset(upper, bounds, geometry, OffsetTarget::Handle),
            fill_leading_inset: value_to_offset(lower, bounds, geometry, OffsetTarget::LeadingTrim),
            fill_trailing_inset: value_to_offset(
                upper,
                bounds,
                geometry,
                OffsetTarget::TrailingTrim,
            ),
        }
    }
}

/// Centre positions of step markers along the track.
///
/// There are `floor(span / step) + 1` markers spread evenly from the centre
/// of a handle at the lower bound to the centre of a handle at the upper
/// bound. When the step does not divide the span the markers stay evenly
/// spaced and so drift from the snapped handle positions, like the partial
/// final step of the mapping. Without an effective step the iterator is empty.
#[must_use]
pub fn step_markers(
    bounds: &SliderBounds,
    step: Option<f64>,
    geometry: &TrackGeometry,
) -> StepMarkers {
    let start = geometry.handle_size / 2.0;
    let Some(step) = effective_step(step) else {
        return StepMarkers {
            start,
            spacing: 0.0,
            next: 0,
            count: 0,
        };
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating conversion; marker counts beyond usize are not drawable anyway"
    )]
    let intervals = (bounds.span() / step).floor() as usize;
    let spacing = if intervals == 0 {
        0.0
    } else {
        geometry.travel() / intervals as f64
    };
    StepMarkers {
        start,
        spacing,
        next: 0,
        count: intervals.saturating_add(1),
    }
}

/// Iterator returned by [`step_markers`].
#[derive(Clone, Debug)]
pub struct StepMarkers {
    start: f64,
    spacing: f64,
    next: usize,
    count: usize,
}

impl Iterator for StepMarkers {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let x = self.start + self.spacing * self.next as f64;
        self.next += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepMarkers {}
