// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: headless slider primitives.
//!
//! This crate holds the logic behind a slider control, for both a single value
//! and a dual-handle range, without drawing anything or receiving input
//! itself. It covers:
//!
//! - Mapping a pointer position along the track to a (possibly stepped) value,
//!   and a value back to handle and fill offsets.
//! - Keeping the two handles of a range slider ordered, with a minimum gap,
//!   while a drag is in progress.
//! - Repairing a host-owned selection when the bounds change.
//! - Explicit styling configuration, per-frame layout helpers, feedback
//!   events and accessibility text.
//!
//! The host owns the value or selection, lays out the track, recognizes drag
//! gestures and renders. It calls into this crate on every layout pass and on
//! every drag event, and writes the results back into its own state.
//!
//! ## Single-value slider
//!
//! ```rust
//! use understory_slider::{SingleLayout, SliderBounds, SliderController, SliderStyle};
//!
//! let style = SliderStyle::default().with_handle_size(20.0);
//! let bounds = SliderBounds::new(0.0, 1.0).unwrap();
//! let mut controller = SliderController::new(bounds, None);
//! let mut value = 0.0;
//!
//! // Layout pass: the track was laid out 220px wide.
//! let geometry = style.geometry(220.0);
//!
//! // Drag move with the pointer at track-local x = 110 (the handle centre).
//! let travel_x = geometry.travel_x(kurbo::Point::new(110.0, 0.0));
//! controller.on_drag(travel_x, &geometry, &mut value);
//! assert_eq!(value, 0.5);
//!
//! let layout = SingleLayout::compute(value, &bounds, &geometry);
//! assert_eq!(layout.handle_offset, 100.0);
//!
//! controller.on_drag_end();
//! ```
//!
//! ## Range slider
//!
//! ```rust
//! use understory_slider::{
//!     Handle, RangeController, Selection, SliderBounds, SliderEvent, TrackGeometry,
//!     range_description,
//! };
//!
//! let bounds = SliderBounds::new(0.0, 100.0).unwrap();
//! let geometry = TrackGeometry::new(300.0, 20.0); // 280px of travel
//! let mut controller = RangeController::new(bounds, Some(10.0));
//! let mut selection = Selection::new(20.0, 80.0);
//!
//! // Drag the upper handle to 46% of the travel: it snaps to 50.
//! let events = controller.on_drag(Handle::Upper, 0.46 * 280.0, &geometry, &mut selection);
//! assert_eq!(selection, Selection::new(20.0, 50.0));
//! assert_eq!(
//!     events.as_slice(),
//!     &[SliderEvent::EditingChanged(true), SliderEvent::ValueChanged]
//! );
//!
//! controller.on_drag_end(Handle::Upper);
//! assert_eq!(range_description(selection), "20 to 50");
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for float rounding in `no_std` builds.
//! - `tracing`: emit `tracing` debug events for drag sessions and bounds repair.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

mod accessibility;
mod bounds;
mod feedback;
mod geometry;
pub mod layout;
pub mod mapping;
pub mod range;
pub mod single;
pub mod style;

pub use accessibility::{range_description, value_description};
pub use bounds::{BoundsError, SliderBounds, effective_step};
pub use feedback::{SliderEvent, SliderEvents};
pub use geometry::TrackGeometry;
pub use layout::{RangeLayout, SingleLayout, StepMarkers, step_markers};
pub use mapping::{OffsetTarget, offset_to_value, snap_value, value_to_offset};
pub use range::{
    DragSession, Handle, MIN_GAP_FRACTION, RangeController, Selection, clamp_selection_to_bounds,
};
pub use single::SliderController;
pub use style::{ColorScheme, HandleColors, SliderStyle};
