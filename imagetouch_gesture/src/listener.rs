// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener glue.
//!
//! Two directions:
//! - [`TouchListener`] is implemented by the application to hear about taps,
//!   scaling and image changes. Every method has a default.
//! - [`PinchListener`], [`DragListener`] and [`TapListener`] are narrow
//!   capability interfaces implemented by [`ImageViewTouch`]; the host's
//!   gesture recognizers deliver their derived signals through them.
//!
//! [`ImageViewTouch`]: crate::ImageViewTouch

use kurbo::Point;
use web_time::Instant;

use crate::events::{DragSample, FlingSample};

bitflags::bitflags! {
    /// Work the view asks its host to do.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HostRequests: u8 {
        /// The transform changed; draw again.
        const REDRAW = 0b0000_0001;
        /// The image or fit changed; lay out again and call `on_layout`.
        const LAYOUT = 0b0000_0010;
    }
}

/// Application callbacks.
///
/// Methods returning `bool` may claim the event: returning `true` suppresses
/// the view's default behavior for it.
pub trait TouchListener<I> {
    /// A double tap at `at`. Claiming it suppresses the double-tap zoom.
    fn on_image_double_tap(&mut self, at: Point) -> bool {
        let _ = at;
        false
    }

    /// The first tap of a possible double tap was released.
    fn on_image_single_tap_up(&mut self, at: Point) -> bool {
        let _ = at;
        false
    }

    /// A single tap that is definitely not part of a double tap.
    fn on_image_single_tap_confirmed(&mut self, at: Point) -> bool {
        let _ = at;
        false
    }

    /// Zooming (pinch or one-hand) began (`true`) or ended (`false`).
    fn on_image_scaling(&mut self, active: bool) {
        let _ = active;
    }

    /// The displayed image changed, or was removed.
    fn on_bitmap_changed(&mut self, image: Option<&I>) {
        let _ = image;
    }

    /// A long press outside of a pinch.
    fn on_image_long_press(&mut self, at: Point) {
        let _ = at;
    }
}

/// Receives the signals of a two-finger pinch recognizer.
pub trait PinchListener {
    /// A pinch began around `focus`. Returns `true` if the pinch is accepted.
    fn on_scale_begin(&mut self, focus: Point) -> bool;
    /// The finger span changed by the factor `scale_delta` since the last call.
    ///
    /// Returns `true` if the delta was consumed.
    fn on_scale(&mut self, scale_delta: f64, focus: Point) -> bool;
    /// The pinch ended.
    fn on_scale_end(&mut self, now: Instant);
}

/// Receives single-pointer drags and flings.
pub trait DragListener {
    /// The pointer moved while dragging. Returns `true` if it panned.
    fn on_drag(&mut self, sample: &DragSample) -> bool;
    /// The pointer was released with velocity. Returns `true` if it scrolled.
    fn on_fling(&mut self, sample: &FlingSample) -> bool;
}

/// Receives tap and long-press recognitions.
pub trait TapListener {
    /// Second tap of a double tap.
    fn on_double_tap(&mut self, at: Point, now: Instant) -> bool;
    /// Release of a first tap.
    fn on_single_tap_up(&mut self, at: Point) -> bool;
    /// A tap that timed out waiting for a second one.
    fn on_single_tap_confirmed(&mut self, at: Point) -> bool;
    /// A held press that did not move.
    fn on_long_press(&mut self, at: Point);
}
