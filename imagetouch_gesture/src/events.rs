// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized input delivered by the host.
//!
//! Raw pointer events go to [`ImageViewTouch::on_pointer`]. Derived gesture
//! signals (drag, fling, pinch, taps) come from the host's recognizers and go
//! through the narrow listener traits in [`crate::listener`].
//!
//! [`ImageViewTouch::on_pointer`]: crate::ImageViewTouch::on_pointer

use kurbo::{Point, Vec2};
use web_time::Instant;

/// Kind of a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// First pointer touched down.
    Down,
    /// One or more pointers moved.
    Move,
    /// Last pointer lifted.
    Up,
    /// The platform aborted the touch sequence.
    Cancel,
    /// Anything else, such as an additional pointer going down or up.
    Other,
}

/// A raw pointer event in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Position of the primary pointer.
    pub position: Point,
    /// Number of pointers currently down.
    pub pointer_count: usize,
    /// When it happened.
    pub time: Instant,
}

impl PointerEvent {
    /// Creates a single-pointer event.
    #[must_use]
    pub fn new(action: PointerAction, position: Point, time: Instant) -> Self {
        Self {
            action,
            position,
            pointer_count: 1,
            time,
        }
    }

    /// Sets the pointer count.
    #[must_use]
    pub fn with_pointer_count(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }
}

/// One step of a drag reported by the host's drag recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Pointer movement since the previous sample.
    pub delta: Vec2,
    /// Pointers down while dragging; only single-pointer drags pan.
    pub pointer_count: usize,
}

/// End of a drag with release velocity, reported by the host's fling recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingSample {
    /// Where the drag started.
    pub origin: Point,
    /// Where the pointer was released.
    pub position: Point,
    /// Release velocity in pixels per second.
    pub velocity: Vec2,
    /// Pointers down while dragging; only single-pointer flings scroll.
    pub pointer_count: usize,
    /// When the pointer was released.
    pub time: Instant,
}

impl FlingSample {
    /// Displacement from `origin` to `position`.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.position - self.origin
    }
}
