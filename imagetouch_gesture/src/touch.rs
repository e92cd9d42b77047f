// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer handling: long-press arming, one-hand zoom and page switching.

use imagetouch_transform::{Image, Slot};
use kurbo::Point;

use crate::events::{PointerAction, PointerEvent};
use crate::interaction::InteractionState;
use crate::view::ImageViewTouch;

/// Base of the one-hand zoom curve: dragging one view height up zooms by this factor.
const ONE_HAND_ZOOM_BASE: f64 = 20.0;

impl<I: Image> ImageViewTouch<I> {
    /// Handles a raw pointer event. Returns `false` once disposed.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> bool {
        if self.disposed {
            return false;
        }
        self.poll_long_press(event.time);

        match event.action {
            PointerAction::Down => self.pointer_down(event),
            PointerAction::Move if event.pointer_count > 1 => self.multi_pointer_move(event),
            PointerAction::Move => self.pointer_move(event.position),
            PointerAction::Up | PointerAction::Cancel => self.pointer_up(event),
            PointerAction::Other => {
                self.long_press.disarm();
                if self.state == InteractionState::OneHandZooming {
                    self.set_state(InteractionState::Dragging);
                }
            }
        }
        true
    }

    fn pointer_down(&mut self, event: &PointerEvent) {
        self.session.begin(event.position);
        self.edge_swipe_eligible = false;
        self.switched = false;
        if self.state == InteractionState::Idle {
            self.set_state(InteractionState::Dragging);
        }
        if self.config.one_hand_scale_enabled {
            self.long_press
                .arm(event.time, self.config.long_press_timeout);
        }
    }

    fn pointer_move(&mut self, position: Point) {
        let Some(delta) = self.session.advance(position) else {
            return;
        };
        match self.state {
            InteractionState::PinchScaling => self.long_press.disarm(),
            InteractionState::OneHandZooming => self.one_hand_zoom(delta.y),
            InteractionState::Dragging | InteractionState::Idle => self.drag_move(position),
        }
    }

    /// A second finger is down: the pinch recognizer owns the motion.
    fn multi_pointer_move(&mut self, event: &PointerEvent) {
        self.session.advance(event.position);
        self.long_press.disarm();
        if self.state == InteractionState::OneHandZooming {
            self.set_state(InteractionState::Dragging);
        }
    }

    fn one_hand_zoom(&mut self, dy: f64) {
        let height = self.model.view_size().height;
        let Some(focus) = self.session.origin() else {
            return;
        };
        if height <= 0.0 {
            return;
        }
        let target = ONE_HAND_ZOOM_BASE.powf(-dy / height) * self.model.scale();
        self.model.zoom_to(target, focus);
        self.scale_factor = self.soft_clamp(target);
        self.request_redraw();
    }

    /// Tracked pinch scale: capped at the maximum, allowed one below the minimum.
    pub(crate) fn soft_clamp(&self, target: f64) -> f64 {
        target
            .max(self.model.min_zoom() - 1.0)
            .min(self.model.max_zoom())
    }

    fn drag_move(&mut self, position: Point) {
        if self.session.exceeds_slop(position, self.config.touch_slop) {
            self.long_press.disarm();
        }
        if self.switched {
            return;
        }
        let Some(origin) = self.session.origin() else {
            return;
        };
        // Positive when the finger moved left, asking for content further right.
        let scroll = origin.x - position.x;
        if scroll == 0.0 {
            return;
        }
        self.can_scroll(scroll.signum());
        if !self.edge_swipe_eligible {
            return;
        }
        let margin = self.config.page_switch_margin;
        let target = if scroll > margin {
            Slot::Right
        } else if scroll < -margin {
            Slot::Left
        } else {
            return;
        };
        if self.switch_to(target) {
            self.switched = true;
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent) {
        self.restore_min_zoom(event.time);
        self.long_press.disarm();
        self.edge_swipe_eligible = false;
        self.switched = false;
        self.session.end();
        self.set_state(InteractionState::Idle);
    }
}
