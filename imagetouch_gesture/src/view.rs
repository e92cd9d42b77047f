// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use imagetouch_animation::{AnimationDriver, AnimationTarget, Easing};
use imagetouch_transform::{FitMode, Image, ScrollCheck, Slot, TransformModel};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use web_time::Instant;

use crate::config::TouchConfig;
use crate::interaction::InteractionState;
use crate::listener::{HostRequests, TouchListener};
use crate::long_press::DelayedTrigger;
use crate::policy::{DoubleTapPolicy, ResetScale};
use crate::session::PointerSession;

/// Outcome of an image assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// The images are displayed.
    Applied,
    /// The view has no size yet; the assignment runs on the next
    /// [`ImageViewTouch::on_layout`] with a usable size.
    Deferred,
    /// The view is disposed; nothing happened.
    Ignored,
}

/// Scales this close to the minimum count as reaching it.
const SCALE_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug)]
struct PendingAssignment<I> {
    images: [Option<I>; 2],
    active: Slot,
    reset: bool,
    restore: Option<Affine>,
    max_zoom: Option<f64>,
}

/// A touch image view: gesture state machine over a [`TransformModel`].
///
/// The host feeds it raw pointer events ([`on_pointer`](Self::on_pointer)),
/// derived gesture signals (through [`PinchListener`], [`DragListener`] and
/// [`TapListener`]), layout ([`on_layout`](Self::on_layout)) and frame ticks
/// ([`tick`](Self::tick)). After each call it drains
/// [`take_requests`](Self::take_requests) and draws the active image with
/// [`image_matrix`](Self::image_matrix).
///
/// [`PinchListener`]: crate::PinchListener
/// [`DragListener`]: crate::DragListener
/// [`TapListener`]: crate::TapListener
pub struct ImageViewTouch<I> {
    pub(crate) model: TransformModel<I>,
    pub(crate) driver: AnimationDriver,
    pub(crate) config: TouchConfig,
    pub(crate) state: InteractionState,
    pub(crate) session: PointerSession,
    pub(crate) long_press: DelayedTrigger,
    pub(crate) edge_swipe_eligible: bool,
    pub(crate) switched: bool,
    /// Scale the next pinch delta multiplies.
    pub(crate) scale_factor: f64,
    pub(crate) policy: Box<dyn DoubleTapPolicy>,
    pub(crate) listener: Option<Box<dyn TouchListener<I>>>,
    requests: HostRequests,
    pending: Option<PendingAssignment<I>>,
    visible_rect: Option<Rect>,
    pub(crate) disposed: bool,
}

impl<I: Image + fmt::Debug> fmt::Debug for ImageViewTouch<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageViewTouch")
            .field("model", &self.model)
            .field("driver", &self.driver)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("long_press", &self.long_press)
            .field("edge_swipe_eligible", &self.edge_swipe_eligible)
            .field("switched", &self.switched)
            .field("scale_factor", &self.scale_factor)
            .field("has_listener", &self.listener.is_some())
            .field("requests", &self.requests)
            .field("pending", &self.pending)
            .field("visible_rect", &self.visible_rect)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl<I: Image> Default for ImageViewTouch<I> {
    fn default() -> Self {
        Self::new(TouchConfig::default())
    }
}

/// The view as seen by the animation driver.
struct ViewTarget<'a, I> {
    model: &'a mut TransformModel<I>,
    scale_factor: &'a mut f64,
    pinching: bool,
    requests: &'a mut HostRequests,
}

impl<I: Image> AnimationTarget for ViewTarget<'_, I> {
    fn scale(&self) -> f64 {
        self.model.scale()
    }

    fn pan_by(&mut self, delta: Vec2) {
        self.model.pan_by(delta);
        *self.requests |= HostRequests::REDRAW;
    }

    fn zoom_to(&mut self, scale: f64, focus: Point) {
        self.model.zoom_to(scale, focus);
        if !self.pinching {
            *self.scale_factor = self.model.scale();
        }
        *self.requests |= HostRequests::REDRAW;
    }

    fn center_correction(&self) -> Vec2 {
        self.model.center_correction()
    }
}

impl<I: Image> ImageViewTouch<I> {
    /// Creates an empty view.
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        let mut model = TransformModel::new();
        model.set_fit_mode(config.fit_mode);
        model.set_min_zoom(config.min_zoom);
        Self {
            model,
            driver: AnimationDriver::new(),
            config,
            state: InteractionState::Idle,
            session: PointerSession::default(),
            long_press: DelayedTrigger::default(),
            edge_swipe_eligible: false,
            switched: false,
            scale_factor: 1.0,
            policy: Box::new(ResetScale),
            listener: None,
            requests: HostRequests::empty(),
            pending: None,
            visible_rect: None,
            disposed: false,
        }
    }

    /// Installs the application listener.
    pub fn set_listener(&mut self, listener: impl TouchListener<I> + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replaces the double-tap policy.
    pub fn set_double_tap_policy(&mut self, policy: impl DoubleTapPolicy + 'static) {
        self.policy = Box::new(policy);
    }

    /// Sets the easing of scroll and zoom animations.
    pub fn set_easing(&mut self, easing: Easing) {
        self.driver.set_easing(easing);
    }

    // --- Configuration ---

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Enables double-tap zoom.
    pub fn set_double_tap_enabled(&mut self, enabled: bool) {
        self.config.double_tap_enabled = enabled;
    }

    /// Enables pinch zoom.
    pub fn set_scale_enabled(&mut self, enabled: bool) {
        self.config.scale_enabled = enabled;
    }

    /// Enables long-press-and-drag zoom.
    pub fn set_one_hand_scale_enabled(&mut self, enabled: bool) {
        self.config.one_hand_scale_enabled = enabled;
        if !enabled {
            self.long_press.disarm();
        }
    }

    /// Enables drag and fling panning.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.config.scroll_enabled = enabled;
    }

    /// Sets the minimum zoom restored at the end of gestures.
    pub fn set_min_zoom(&mut self, min_zoom: f64) {
        self.config.min_zoom = min_zoom;
        self.model.set_min_zoom(min_zoom);
    }

    /// Sets the maximum zoom used by assignments that do not pass one.
    ///
    /// Values below `1.0` are raised to `1.0`; `None` derives it from the image.
    pub fn set_default_max_zoom(&mut self, max_zoom: Option<f64>) {
        self.config.default_max_zoom = max_zoom.map(|max| max.max(1.0));
    }

    /// Sets the fit mode. A change resets the user zoom and requests a layout.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.config.fit_mode = mode;
        if self.model.set_fit_mode(mode) {
            tracing::debug!(?mode, "fit mode changed");
            self.scale_factor = 1.0;
            self.requests |= HostRequests::LAYOUT | HostRequests::REDRAW;
        }
    }

    /// Current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.model.fit_mode()
    }

    /// Restricts edge detection to `visible` (view coordinates).
    ///
    /// Defaults to the whole view when `None`.
    pub fn set_visible_rect(&mut self, visible: Option<Rect>) {
        self.visible_rect = visible;
    }

    // --- Image assignment ---

    /// Shows `image` in the right slot, or clears the view for `None`.
    pub fn set_image(&mut self, image: Option<I>, reset: bool) -> Assignment {
        match image {
            Some(image) => self.assign([Some(image), None], Slot::Right, reset, None, None),
            None if self.disposed => Assignment::Ignored,
            None => {
                self.clear();
                Assignment::Applied
            }
        }
    }

    /// Shows a pair of images with `active` displayed.
    pub fn set_images(
        &mut self,
        right: Option<I>,
        left: Option<I>,
        reset: bool,
        active: Slot,
    ) -> Assignment {
        self.assign([right, left], active, reset, None, None)
    }

    /// Assigns both slots.
    ///
    /// `reset` returns the user zoom to identity; `restore` then overwrites it
    /// with a matrix from [`display_matrix`](Self::display_matrix). A
    /// `max_zoom` of at least `1.0` is used as is, otherwise the configured
    /// default or the derived value applies.
    ///
    /// Before the view has a size the call is kept and replayed on layout; a
    /// later call replaces a kept one.
    pub fn assign(
        &mut self,
        images: [Option<I>; 2],
        active: Slot,
        reset: bool,
        restore: Option<Affine>,
        max_zoom: Option<f64>,
    ) -> Assignment {
        if self.disposed {
            return Assignment::Ignored;
        }
        let assignment = PendingAssignment {
            images,
            active,
            reset,
            restore,
            max_zoom,
        };
        if !self.model.is_laid_out() {
            tracing::debug!(?active, "image assignment deferred until layout");
            self.pending = Some(assignment);
            return Assignment::Deferred;
        }
        self.pending = None;
        self.apply_assignment(assignment);
        Assignment::Applied
    }

    fn apply_assignment(&mut self, assignment: PendingAssignment<I>) {
        let PendingAssignment {
            images,
            active,
            reset,
            restore,
            max_zoom,
        } = assignment;
        self.model.set_images(images, active);
        self.model
            .apply(reset, restore, max_zoom.or(self.config.default_max_zoom));
        self.model.recenter();
        tracing::debug!(
            ?active,
            max_zoom = self.model.max_zoom(),
            scale = self.model.scale(),
            "images assigned"
        );
        self.after_image_change();
    }

    fn after_image_change(&mut self) {
        self.scale_factor = self.model.scale();
        self.requests |= HostRequests::LAYOUT | HostRequests::REDRAW;
        if let Some(listener) = self.listener.as_mut() {
            listener.on_bitmap_changed(self.model.image());
        }
    }

    /// Shows the left slot. Returns `false` if it is empty or already shown.
    pub fn go_left_image(&mut self) -> bool {
        self.switch_to(Slot::Left)
    }

    /// Shows the right slot. Returns `false` if it is empty or already shown.
    pub fn go_right_image(&mut self) -> bool {
        self.switch_to(Slot::Right)
    }

    pub(crate) fn switch_to(&mut self, slot: Slot) -> bool {
        if self.disposed || !self.model.slots().can_switch_to(slot) {
            return false;
        }
        let max_zoom = self.model.max_zoom();
        self.model.set_active_slot(slot);
        self.model.apply(true, None, Some(max_zoom));
        self.model.recenter();
        tracing::info!(?slot, "switched image slot");
        self.after_image_change();
        true
    }

    /// Removes every image.
    pub fn clear(&mut self) {
        if self.disposed {
            return;
        }
        self.pending = None;
        self.driver.cancel();
        self.model.clear();
        self.after_image_change();
    }

    /// Tears the view down. Every later call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.clear();
        self.long_press.disarm();
        self.session.end();
        self.state = InteractionState::Idle;
        self.listener = None;
        self.requests = HostRequests::empty();
        self.disposed = true;
        tracing::info!("view disposed");
    }

    /// Returns `true` after [`dispose`](Self::dispose).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // --- Host loop ---

    /// Records the laid-out view size.
    ///
    /// Replays a deferred assignment, refits the active image and re-applies
    /// the current zoom about the view centre.
    pub fn on_layout(&mut self, size: Size) {
        if self.disposed {
            return;
        }
        self.model.set_view_size(size);
        if !self.model.is_laid_out() {
            return;
        }
        tracing::debug!(width = size.width, height = size.height, "layout");
        if let Some(pending) = self.pending.take() {
            self.apply_assignment(pending);
        }
        self.model.relayout();
        let scale = self.model.scale();
        self.model.zoom_to(scale, self.view_center());
        self.sync_scale_factor();
        self.requests |= HostRequests::REDRAW;
    }

    /// Advances animations and the long-press trigger to `now`.
    ///
    /// Returns `true` while the host should keep ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        self.poll_long_press(now);

        let pinching = self.is_pinching();
        let mut target = ViewTarget {
            model: &mut self.model,
            scale_factor: &mut self.scale_factor,
            pinching,
            requests: &mut self.requests,
        };
        self.driver.tick(now, &mut target);
        self.driver.is_animating() || self.long_press.is_armed()
    }

    /// Drains the accumulated host requests.
    pub fn take_requests(&mut self) -> HostRequests {
        core::mem::take(&mut self.requests)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.requests |= HostRequests::REDRAW;
    }

    // --- Queries ---

    /// The active image.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        self.model.image()
    }

    /// The active slot.
    #[must_use]
    pub fn active_slot(&self) -> Slot {
        self.model.active_slot()
    }

    /// The underlying transform model.
    #[must_use]
    pub fn model(&self) -> &TransformModel<I> {
        &self.model
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Current user scale; `1.0` is the fitted image.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.model.scale()
    }

    /// Scale of the fitted image relative to its intrinsic size.
    #[must_use]
    pub fn real_scale(&self) -> f64 {
        self.model.real_scale()
    }

    /// Scale the next pinch delta multiplies.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Minimum zoom.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.model.min_zoom()
    }

    /// Maximum zoom.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.model.max_zoom()
    }

    /// User zoom and pan, restorable through [`assign`](Self::assign).
    #[must_use]
    pub fn display_matrix(&self) -> Affine {
        self.model.display_matrix()
    }

    /// Transform to draw the active image with.
    #[must_use]
    pub fn image_matrix(&self) -> Affine {
        self.model.image_matrix()
    }

    /// The active image's bounds in view coordinates.
    #[must_use]
    pub fn bitmap_rect(&self) -> Option<Rect> {
        self.model.bitmap_rect()
    }

    /// Returns `true` while a scroll or zoom animation is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Checks whether the image can scroll horizontally in `direction`.
    ///
    /// At an edge with the other slot available this still answers `true`
    /// and makes the current drag eligible for a slot switch.
    pub fn can_scroll(&mut self, direction: f64) -> bool {
        let visible = self
            .visible_rect
            .unwrap_or_else(|| Rect::from_origin_size(Point::ORIGIN, self.model.view_size()));
        match self
            .model
            .can_scroll(direction, visible, self.config.scroll_delta_threshold)
        {
            ScrollCheck::Room => true,
            ScrollCheck::Switch(slot) => {
                if !self.edge_swipe_eligible {
                    tracing::debug!(?slot, "edge reached, slot switch armed");
                }
                self.edge_swipe_eligible = true;
                true
            }
            ScrollCheck::Blocked => false,
        }
    }

    // --- Programmatic pan and zoom ---

    /// Pans immediately, with edge clamping.
    pub fn pan_by(&mut self, delta: Vec2) {
        if self.disposed {
            return;
        }
        self.model.pan_by(delta);
        self.request_redraw();
    }

    /// Pans by `delta` over `duration`.
    pub fn scroll_by(&mut self, delta: Vec2, duration: Duration, now: Instant) {
        if self.disposed || self.model.image().is_none() {
            return;
        }
        self.driver.scroll_by(delta, duration, now);
    }

    /// Scrolls so that `point` (view coordinates) moves to the view centre.
    pub fn center_to(&mut self, point: Point, now: Instant) {
        let delta = self.view_center() - point;
        self.scroll_by(delta, self.config.center_duration, now);
    }

    /// Scrolls so that `point` (image coordinates) moves to the view centre.
    ///
    /// A negative coordinate leaves that axis alone.
    pub fn center_to_image(&mut self, point: Point, now: Instant) {
        let Some(image) = self.model.image() else {
            return;
        };
        let size = image.intrinsic_size();
        if size.is_zero_area() {
            return;
        }
        let on_screen = self.model.image_matrix() * point;
        let to_center = self.view_center() - on_screen;
        let delta = Vec2::new(
            if point.x >= 0.0 { to_center.x } else { 0.0 },
            if point.y >= 0.0 { to_center.y } else { 0.0 },
        );
        self.scroll_by(delta, self.config.center_duration, now);
    }

    /// Zooms immediately about the view centre. Only the maximum is enforced.
    pub fn zoom_to(&mut self, scale: f64) {
        if self.disposed {
            return;
        }
        let center = self.view_center();
        self.model.zoom_to(scale, center);
        self.sync_scale_factor();
        self.request_redraw();
    }

    /// Zooms about the view centre over `duration`, within `[min, max]`.
    pub fn zoom_to_animated(&mut self, scale: f64, duration: Duration, now: Instant) {
        self.zoom_to_about(scale, self.view_center(), duration, now);
    }

    /// Zooms about `focus` over `duration`, within `[min, max]`.
    pub fn zoom_to_about(&mut self, scale: f64, focus: Point, duration: Duration, now: Instant) {
        if self.disposed {
            return;
        }
        let scale = scale.min(self.model.max_zoom()).max(self.model.min_zoom());
        self.animate_zoom(scale, focus, duration, now);
    }

    pub(crate) fn animate_zoom(&mut self, scale: f64, focus: Point, duration: Duration, now: Instant) {
        let pinching = self.is_pinching();
        let mut target = ViewTarget {
            model: &mut self.model,
            scale_factor: &mut self.scale_factor,
            pinching,
            requests: &mut self.requests,
        };
        self.driver.zoom_to(&mut target, scale, focus, duration, now);
    }

    /// Animates back to the minimum zoom if the image is below it.
    ///
    /// A maximum below the minimum is the floor instead.
    pub(crate) fn restore_min_zoom(&mut self, now: Instant) {
        let min = self.model.min_zoom();
        let floor = min.min(self.model.max_zoom());
        if self.model.scale() < floor - SCALE_EPSILON {
            let center = self.view_center();
            self.animate_zoom(min, center, self.config.min_zoom_restore_duration, now);
        }
    }

    pub(crate) fn sync_scale_factor(&mut self) {
        if !self.is_pinching() {
            self.scale_factor = self.model.scale();
        }
    }

    pub(crate) fn is_pinching(&self) -> bool {
        self.state == InteractionState::PinchScaling
    }

    pub(crate) fn view_center(&self) -> Point {
        let size = self.model.view_size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// Moves to `next`, telling the listener when zooming starts or stops.
    pub(crate) fn set_state(&mut self, next: InteractionState) {
        if let Some(active) = self.state.transition(next) {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_image_scaling(active);
            }
        }
    }

    /// Enters one-hand zoom if the long press came due.
    pub(crate) fn poll_long_press(&mut self, now: Instant) {
        if self.long_press.poll(now)
            && self.config.one_hand_scale_enabled
            && self.state == InteractionState::Dragging
        {
            tracing::debug!("long press held, one-hand zoom");
            self.set_state(InteractionState::OneHandZooming);
        }
    }
}
