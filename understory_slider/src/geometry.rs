// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Pixel geometry of a slider track, recomputed by the host on every layout pass.
///
/// `track_width` includes the handle diameter: a handle at the lower bound
/// starts at `0` and a handle at the upper bound ends at `track_width`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Width available for the track, including the handle diameter.
    pub track_width: f64,
    /// Diameter of a handle.
    pub handle_size: f64,
}

impl TrackGeometry {
    /// Creates a geometry, clamping negative or NaN extents to zero.
    #[must_use]
    pub fn new(track_width: f64, handle_size: f64) -> Self {
        Self {
            track_width: non_negative(track_width),
            handle_size: non_negative(handle_size),
        }
    }

    /// Creates a geometry from the size the host laid the track out at.
    ///
    /// Only the width is used; the height belongs to the styling layer.
    #[must_use]
    pub fn from_size(size: Size, handle_size: f64) -> Self {
        Self::new(size.width, handle_size)
    }

    /// Distance the leading edge of a handle can travel.
    ///
    /// Zero when the handle does not fit in the track.
    #[must_use]
    pub fn travel(&self) -> f64 {
        non_negative(self.track_width - self.handle_size)
    }

    /// Converts a track-local pointer location into the travel coordinate.
    ///
    /// The pointer addresses the handle centre, so half the handle is
    /// subtracted. The result may fall outside `0..=travel()`; the mapping
    /// functions clamp it.
    #[must_use]
    pub fn travel_x(&self, location: Point) -> f64 {
        location.x - self.handle_size / 2.0
    }
}

fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
