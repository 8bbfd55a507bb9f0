// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit styling configuration for a slider.
//!
//! All knobs live on [`SliderStyle`], which the host passes by value to its
//! rendering layer. Nothing here draws; the style only feeds the sizes used
//! by [`TrackGeometry`] and [`crate::layout`], plus the colors and toggles a
//! renderer needs.

use peniko::Color;

use crate::bounds::effective_step;
use crate::feedback::SliderEvent;
use crate::geometry::TrackGeometry;

/// Default track height in logical pixels.
pub const DEFAULT_TRACK_HEIGHT: f64 = 4.0;

/// Default handle diameter in logical pixels.
pub const DEFAULT_HANDLE_SIZE: f64 = 28.0;

/// Step marker height relative to the handle when no explicit height is set.
pub const STEP_HEIGHT_RATIO: f64 = 0.8;

/// Light or dark appearance, used to resolve the default track color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

/// Fill colors of the two handles.
///
/// A single-value slider uses `lower`.
#[derive(Clone, Copy, Debug)]
pub struct HandleColors {
    /// Color of the lower (or only) handle.
    pub lower: Color,
    /// Color of the upper handle of a range slider.
    pub upper: Color,
}

impl HandleColors {
    /// Uses `color` for both handles.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self {
            lower: color,
            upper: color,
        }
    }
}

impl Default for HandleColors {
    fn default() -> Self {
        Self::uniform(Color::WHITE)
    }
}

/// Styling options for a slider, with the defaults of a platform slider.
#[derive(Clone, Copy, Debug)]
pub struct SliderStyle {
    /// Height of the track. Defaults to [`DEFAULT_TRACK_HEIGHT`].
    pub track_height: f64,
    /// Diameter of each handle. Defaults to [`DEFAULT_HANDLE_SIZE`].
    pub handle_size: f64,
    /// Handle fill colors. Defaults to white.
    pub handle_colors: HandleColors,
    /// Color of the unfilled track and step markers.
    ///
    /// `None` uses the system grey for the active [`ColorScheme`].
    pub track_color: Option<Color>,
    /// Whether step markers are drawn. Only meaningful with a step. Defaults to `false`.
    pub show_steps: bool,
    /// Height of step markers. `None` means [`STEP_HEIGHT_RATIO`] of the handle size.
    pub step_height: Option<f64>,
    /// Whether the host should play selection haptics. Defaults to `false`.
    pub haptic_feedback: bool,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_height: DEFAULT_TRACK_HEIGHT,
            handle_size: DEFAULT_HANDLE_SIZE,
            handle_colors: HandleColors::default(),
            track_color: None,
            show_steps: false,
            step_height: None,
            haptic_feedback: false,
        }
    }
}

impl SliderStyle {
    /// Sets the track height.
    #[must_use]
    pub fn with_track_height(mut self, height: f64) -> Self {
        self.track_height = height.max(0.0);
        self
    }

    /// Sets the handle diameter.
    #[must_use]
    pub fn with_handle_size(mut self, size: f64) -> Self {
        self.handle_size = size.max(0.0);
        self
    }

    /// Uses `color` for every handle.
    #[must_use]
    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.handle_colors = HandleColors::uniform(color);
        self
    }

    /// Colors the lower and upper handles of a range slider separately.
    #[must_use]
    pub fn with_handle_colors(mut self, lower: Color, upper: Color) -> Self {
        self.handle_colors = HandleColors { lower, upper };
        self
    }

    /// Overrides the track color.
    #[must_use]
    pub fn with_track_color(mut self, color: Color) -> Self {
        self.track_color = Some(color);
        self
    }

    /// Shows or hides step markers.
    #[must_use]
    pub fn with_steps_shown(mut self, shown: bool) -> Self {
        self.show_steps = shown;
        self
    }

    /// Sets an explicit step marker height.
    #[must_use]
    pub fn with_step_height(mut self, height: f64) -> Self {
        self.step_height = Some(height.max(0.0));
        self
    }

    /// Enables or disables haptic feedback.
    #[must_use]
    pub fn with_haptic_feedback(mut self, enabled: bool) -> Self {
        self.haptic_feedback = enabled;
        self
    }

    /// Height the slider occupies: the tallest of handle, track and explicit step height.
    #[must_use]
    pub fn frame_height(&self) -> f64 {
        self.handle_size
            .max(self.track_height)
            .max(self.step_height.unwrap_or(0.0))
    }

    /// Height at which step markers are drawn.
    #[must_use]
    pub fn step_marker_height(&self) -> f64 {
        self.step_height.unwrap_or(self.handle_size * STEP_HEIGHT_RATIO)
    }

    /// The step to draw markers for, or `None` when markers are hidden or
    /// the slider is continuous.
    #[must_use]
    pub fn marker_step(&self, step: Option<f64>) -> Option<f64> {
        if self.show_steps {
            effective_step(step)
        } else {
            None
        }
    }

    /// Returns the track color, falling back to the system grey for `scheme`.
    #[must_use]
    pub fn resolved_track_color(&self, scheme: ColorScheme) -> Color {
        self.track_color.unwrap_or(match scheme {
            ColorScheme::Light => Color::from_rgba8(228, 228, 230, 255),
            ColorScheme::Dark => Color::from_rgba8(61, 61, 65, 255),
        })
    }

    /// Track geometry for a laid-out track of `track_width`.
    #[must_use]
    pub fn geometry(&self, track_width: f64) -> TrackGeometry {
        TrackGeometry::new(track_width, self.handle_size)
    }

    /// Returns `true` if the host should play selection feedback for `event`.
    #[must_use]
    pub fn plays_haptic(&self, event: SliderEvent) -> bool {
        self.haptic_feedback && event.wants_haptic()
    }
}
