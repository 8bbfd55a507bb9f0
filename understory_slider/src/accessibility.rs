// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility value text for assistive technologies.

use alloc::format;
use alloc::string::{String, ToString};

use crate::range::Selection;

/// Describes a single slider value, e.g. `"42"` or `"0.5"`.
#[must_use]
pub fn value_description(value: f64) -> String {
    value.to_string()
}

/// Describes a range selection as `"{lower} to {upper}"`.
#[must_use]
pub fn range_description(selection: Selection) -> String {
    format!("{} to {}", selection.lower, selection.upper)
}
