// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered events reported by the slider controllers.
//!
//! Controllers never call back into the host. Each gesture method returns the
//! events it produced and the host decides what to do with them: forward
//! [`SliderEvent::EditingChanged`] to an "editing changed" callback, play a
//! selection haptic when [`SliderEvent::wants_haptic`] is set and haptics are
//! enabled in [`SliderStyle`](crate::SliderStyle), and so on.

use smallvec::SmallVec;

/// A transition observed while processing a gesture event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderEvent {
    /// The control as a whole moved between idle and dragging.
    ///
    /// Carries the new editing state.
    EditingChanged(bool),
    /// A drag move changed the published value or selection.
    ValueChanged,
}

impl SliderEvent {
    /// Returns `true` if a host with haptics enabled should emit selection feedback.
    #[must_use]
    pub const fn wants_haptic(self) -> bool {
        match self {
            Self::EditingChanged(_) | Self::ValueChanged => true,
        }
    }
}

/// Events produced by a single gesture call; at most two.
pub type SliderEvents = SmallVec<[SliderEvent; 2]>;

/// Tracks the aggregate editing state and turns changes into events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditingTracker {
    editing: bool,
}

impl EditingTracker {
    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    /// Records the current editing state, pushing an event on change.
    pub(crate) fn update(&mut self, editing: bool, events: &mut SliderEvents) {
        if self.editing != editing {
            self.editing = editing;
            events.push(SliderEvent::EditingChanged(editing));
        }
    }
}
