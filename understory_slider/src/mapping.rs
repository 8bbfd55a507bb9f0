// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between handle travel in pixels and domain values.
//!
//! Both directions are pure functions of the bounds, the track geometry and
//! the optional step. They are called on every layout pass and on every drag
//! move, so they never allocate and never fail: degenerate input is clamped
//! or defaulted.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::{OffsetTarget, SliderBounds, TrackGeometry, offset_to_value, value_to_offset};
//!
//! let bounds = SliderBounds::new(0.0, 1.0).unwrap();
//! let geometry = TrackGeometry::new(220.0, 20.0);
//!
//! // Pointer halfway along the 200px of handle travel.
//! assert_eq!(offset_to_value(100.0, &bounds, &geometry, None), 0.5);
//!
//! // And back: the handle's leading edge sits at 100px.
//! assert_eq!(value_to_offset(0.5, &bounds, &geometry, OffsetTarget::Handle), 100.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::bounds::{SliderBounds, effective_step};
use crate::geometry::TrackGeometry;

/// Which edge an offset from [`value_to_offset`] is measured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetTarget {
    /// Leading edge of the handle, measured from the leading edge of the track.
    Handle,
    /// Inset of the filled track from the leading edge, centred on the handle.
    ///
    /// Used by the lower handle of a range slider.
    LeadingTrim,
    /// Inset of the filled track from the trailing edge, centred on the handle.
    ///
    /// Used by a single-value slider and by the upper handle of a range slider.
    TrailingTrim,
}

/// Converts a domain value into a pixel offset for `target`.
///
/// `value` is expected to lie within `bounds`; callers clamp. When the handle
/// does not fit in the track the travel is zero, so the handle offset is `0`
/// and the trims sit half a handle in from their edge.
#[must_use]
pub fn value_to_offset(
    value: f64,
    bounds: &SliderBounds,
    geometry: &TrackGeometry,
    target: OffsetTarget,
) -> f64 {
    let leading = bounds.fraction_of(value) * geometry.travel();
    match target {
        OffsetTarget::Handle => leading,
        OffsetTarget::LeadingTrim => leading + geometry.handle_size / 2.0,
        OffsetTarget::TrailingTrim => {
            geometry.track_width - (leading + geometry.handle_size / 2.0)
        }
    }
}

/// Converts a pointer position along the handle travel into a domain value.
///
/// `pointer_x` is measured from the leading origin of the handle travel (see
/// [`TrackGeometry::travel_x`]). With an effective `step` the value snaps to
/// the nearest step counted from `bounds.lower()`, ties rounding away from
/// zero. The result is always within `bounds`; a zero-width travel or a NaN
/// pointer yields `bounds.lower()`.
#[must_use]
pub fn offset_to_value(
    pointer_x: f64,
    bounds: &SliderBounds,
    geometry: &TrackGeometry,
    step: Option<f64>,
) -> f64 {
    let travel = geometry.travel();
    if travel <= 0.0 || pointer_x.is_nan() {
        return bounds.lower();
    }
    let fraction = pointer_x / travel;
    let value = match effective_step(step) {
        Some(step) => bounds.lower() + (fraction * bounds.span() / step).round() * step,
        None => bounds.value_at(fraction),
    };
    bounds.clamp(value)
}

/// Snaps a domain value onto the step grid and clamps it into `bounds`.
///
/// Without an effective step this is a plain clamp. A step that does not
/// divide the span leaves a partial final step, which clamps to `upper`.
#[must_use]
pub fn snap_value(value: f64, bounds: &SliderBounds, step: Option<f64>) -> f64 {
    let value = bounds.clamp(value);
    match effective_step(step) {
        Some(step) => {
            bounds.clamp(bounds.lower() + ((value - bounds.lower()) / step).round() * step)
        }
        None => value,
    }
}
