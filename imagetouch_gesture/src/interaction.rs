// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What the current touch sequence is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No pointer down.
    #[default]
    Idle,
    /// One pointer down, panning (or about to become a long press).
    Dragging,
    /// Long press held; vertical movement zooms.
    OneHandZooming,
    /// A two-finger pinch owns the transform.
    PinchScaling,
}

impl InteractionState {
    /// Returns `true` in the states that report "scaling" to the listener.
    #[must_use]
    pub fn is_zooming(self) -> bool {
        matches!(self, Self::OneHandZooming | Self::PinchScaling)
    }

    /// Moves to `next` and returns the scaling edge crossed, if any.
    ///
    /// `Some(true)` when entering a zooming state from a non-zooming one,
    /// `Some(false)` when leaving one, `None` otherwise.
    pub fn transition(&mut self, next: Self) -> Option<bool> {
        let was = self.is_zooming();
        if *self != next {
            tracing::debug!(from = ?*self, to = ?next, "interaction state");
        }
        *self = next;
        let is = next.is_zooming();
        (was != is).then_some(is)
    }
}
