// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived gesture signals: pinch, drag, fling and taps.
//!
//! While a one-hand zoom is in progress the view owns the pointer, so every
//! recognizer signal is dropped.

use imagetouch_transform::Image;
use kurbo::Point;
use web_time::Instant;

use crate::events::{DragSample, FlingSample};
use crate::interaction::InteractionState;
use crate::listener::{DragListener, PinchListener, TapListener};
use crate::view::ImageViewTouch;

impl<I: Image> ImageViewTouch<I> {
    fn accepts_recognizers(&self) -> bool {
        !self.disposed && self.state != InteractionState::OneHandZooming
    }

    fn accepts_pan(&self, pointer_count: usize) -> bool {
        self.accepts_recognizers()
            && self.config.scroll_enabled
            && pointer_count <= 1
            && !self.is_pinching()
    }
}

impl<I: Image> PinchListener for ImageViewTouch<I> {
    fn on_scale_begin(&mut self, focus: Point) -> bool {
        if !self.accepts_recognizers() {
            return false;
        }
        tracing::debug!(x = focus.x, y = focus.y, "pinch began");
        self.long_press.disarm();
        self.policy.reset();
        self.set_state(InteractionState::PinchScaling);
        true
    }

    fn on_scale(&mut self, scale_delta: f64, focus: Point) -> bool {
        if !self.is_pinching() || self.disposed {
            return false;
        }
        self.long_press.disarm();
        if !self.config.scale_enabled {
            return false;
        }
        let target = self.scale_factor * scale_delta;
        self.model.zoom_to(target, focus);
        self.scale_factor = self.soft_clamp(target);
        self.request_redraw();
        true
    }

    fn on_scale_end(&mut self, now: Instant) {
        if !self.is_pinching() || self.disposed {
            return;
        }
        self.restore_min_zoom(now);
        let next = if self.session.is_active() {
            InteractionState::Dragging
        } else {
            InteractionState::Idle
        };
        self.set_state(next);
        tracing::debug!(scale = self.model.scale(), "pinch ended");
    }
}

impl<I: Image> DragListener for ImageViewTouch<I> {
    fn on_drag(&mut self, sample: &DragSample) -> bool {
        if !self.accepts_pan(sample.pointer_count) {
            return false;
        }
        self.model.pan_by(sample.delta);
        self.request_redraw();
        true
    }

    fn on_fling(&mut self, sample: &FlingSample) -> bool {
        if !self.accepts_pan(sample.pointer_count) {
            return false;
        }
        let threshold = self.config.fling_velocity_threshold;
        if sample.velocity.x.abs() <= threshold && sample.velocity.y.abs() <= threshold {
            return false;
        }
        let delta = sample.displacement() / 2.0;
        tracing::debug!(vx = sample.velocity.x, vy = sample.velocity.y, "fling");
        self.scroll_by(delta, self.config.fling_duration, sample.time);
        true
    }
}

impl<I: Image> TapListener for ImageViewTouch<I> {
    fn on_double_tap(&mut self, at: Point, now: Instant) -> bool {
        if !self.accepts_recognizers() {
            return false;
        }
        let claimed = self
            .listener
            .as_mut()
            .is_some_and(|listener| listener.on_image_double_tap(at));
        if claimed || !self.config.double_tap_enabled {
            return claimed;
        }
        let max = self.model.max_zoom();
        let target = self
            .policy
            .target_scale(self.model.scale(), max)
            .max(self.model.min_zoom())
            .min(max);
        self.scale_factor = target;
        self.animate_zoom(target, at, self.config.double_tap_duration, now);
        true
    }

    fn on_single_tap_up(&mut self, at: Point) -> bool {
        if !self.accepts_recognizers() {
            return false;
        }
        self.listener
            .as_mut()
            .is_some_and(|listener| listener.on_image_single_tap_up(at))
    }

    fn on_single_tap_confirmed(&mut self, at: Point) -> bool {
        if !self.accepts_recognizers() {
            return false;
        }
        self.listener
            .as_mut()
            .is_some_and(|listener| listener.on_image_single_tap_confirmed(at))
    }

    fn on_long_press(&mut self, at: Point) {
        if !self.accepts_recognizers() || self.is_pinching() {
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_image_long_press(at);
        }
    }
}
