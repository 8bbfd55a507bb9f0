// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider bounds and step normalization.

use core::fmt;

/// Error returned when slider bounds cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// `lower` was not strictly less than `upper`.
    Empty,
    /// One of the endpoints was NaN or infinite.
    NonFinite,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("slider bounds must satisfy lower < upper"),
            Self::NonFinite => f.write_str("slider bounds must be finite"),
        }
    }
}

impl core::error::Error for BoundsError {}

/// The closed numeric interval a slider value or selection stays within.
///
/// Bounds are validated on construction, so `lower < upper` holds for every
/// value of this type and the span used as a divisor is never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    lower: f64,
    upper: f64,
}

impl SliderBounds {
    /// Creates bounds from `lower` and `upper`.
    ///
    /// Returns [`BoundsError::Empty`] unless `lower < upper`, and
    /// [`BoundsError::NonFinite`] if either endpoint is NaN or infinite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, BoundsError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(BoundsError::NonFinite);
        }
        if lower >= upper {
            return Err(BoundsError::Empty);
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`, always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Clamps `value` into the bounds.
    ///
    /// NaN maps to `lower`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lower;
        }
        value.clamp(self.lower, self.upper)
    }

    /// Returns `true` if `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns the fractional position of `value`, `0.0` at `lower` and `1.0` at `upper`.
    ///
    /// The value is not clamped first.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        (value - self.lower) / self.span()
    }

    /// Maps a fraction back into the domain. Inverse of [`SliderBounds::fraction_of`].
    #[must_use]
    pub fn value_at(&self, fraction: f64) -> f64 {
        fraction * self.span() + self.lower
    }
}

impl Default for SliderBounds {
    /// `0.0..=1.0`.
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

/// Normalizes an optional step: non-positive or non-finite steps mean continuous.
#[must_use]
pub fn effective_step(step: Option<f64>) -> Option<f64> {
    step.filter(|s| s.is_finite() && *s > 0.0)
}
