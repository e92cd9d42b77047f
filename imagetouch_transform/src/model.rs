// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::clamp::{center_correction, clamped_scroll};
use crate::modes::{FitMode, Slot, derive_max_zoom, is_measurable};
use crate::slots::{Image, SlotPair};

/// Default minimum zoom.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Answer of [`TransformModel::can_scroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollCheck {
    /// The image can still move in the requested direction.
    Room,
    /// The image is at its edge and the other slot may be shown instead.
    Switch(Slot),
    /// The image is at its edge and there is nothing to switch to.
    Blocked,
}

impl ScrollCheck {
    /// Returns `true` unless the check is [`ScrollCheck::Blocked`].
    #[must_use]
    pub fn can_scroll(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Transform state of a touch image view.
///
/// The displayed transform is the composition of two matrices:
/// - the *base* matrix of the active slot, derived from the image size, the
///   view size, the [`FitMode`] and the maximum zoom;
/// - the *supplemental* matrix, holding everything the user did on top.
///
/// The effective transform is `supplemental * base` (base applied first) and is
/// recomputed on every query. "Scale" always refers to the X scale of the
/// supplemental matrix, so `1.0` means "as fitted".
#[derive(Clone, Debug)]
pub struct TransformModel<I> {
    slots: SlotPair<I>,
    supplemental: Affine,
    view_size: Size,
    fit_mode: FitMode,
    min_zoom: f64,
    max_zoom: Option<f64>,
}

impl<I> Default for TransformModel<I> {
    fn default() -> Self {
        Self {
            slots: SlotPair::default(),
            supplemental: Affine::IDENTITY,
            view_size: Size::ZERO,
            fit_mode: FitMode::default(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: None,
        }
    }
}

impl<I: Image> TransformModel<I> {
    /// Creates an empty model with no view size yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Records a new view size. Returns `true` if it changed.
    ///
    /// Base matrices are not touched; call [`TransformModel::relayout`] once
    /// the host has finished laying out.
    pub fn set_view_size(&mut self, size: Size) -> bool {
        if self.view_size == size {
            return false;
        }
        self.view_size = size;
        true
    }

    /// Returns `true` once the view has a usable size.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        is_measurable(self.view_size)
    }

    /// Current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the fit mode.
    ///
    /// A change resets the supplemental matrix; the caller is expected to
    /// re-layout so the base matrix follows. Returns `true` if it changed.
    pub fn set_fit_mode(&mut self, mode: FitMode) -> bool {
        if self.fit_mode == mode {
            return false;
        }
        self.fit_mode = mode;
        self.supplemental = Affine::IDENTITY;
        true
    }

    /// Minimum zoom.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Sets the minimum zoom. Only gesture ends and animated zooms honor it.
    pub fn set_min_zoom(&mut self, min_zoom: f64) {
        self.min_zoom = min_zoom;
    }

    /// Maximum zoom: the cached or explicit value, else derived from the active image.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        match self.max_zoom {
            Some(max) => max,
            None => self.derived_max_zoom(),
        }
    }

    /// Drops the cached maximum zoom so it is derived again on next use.
    pub fn invalidate_max_zoom(&mut self) {
        self.max_zoom = None;
    }

    fn derived_max_zoom(&self) -> f64 {
        match self.slots.active_image() {
            Some(image) => derive_max_zoom(image.intrinsic_size(), self.view_size),
            None => 1.0,
        }
    }

    /// The image slots.
    #[must_use]
    pub fn slots(&self) -> &SlotPair<I> {
        &self.slots
    }

    /// Replaces both slots without recomputing anything.
    ///
    /// Follow with [`TransformModel::apply`] to lay the images out.
    pub fn set_images(&mut self, images: [Option<I>; 2], active: Slot) {
        self.slots.replace(images, active);
    }

    /// Makes `slot` active without recomputing anything.
    pub fn set_active_slot(&mut self, slot: Slot) {
        self.slots.set_active(slot);
    }

    /// Drops both images and resets every matrix.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.supplemental = Affine::IDENTITY;
        self.max_zoom = None;
    }

    /// Lays out the current slots.
    ///
    /// - The maximum zoom becomes `max_zoom` when it is at least `1`, otherwise
    ///   it is derived from the active image and cached.
    /// - Every populated slot gets a fresh base matrix.
    /// - `reset` restores the supplemental matrix to identity, then `restore`
    ///   (if any) overwrites it.
    pub fn apply(&mut self, reset: bool, restore: Option<Affine>, max_zoom: Option<f64>) {
        self.max_zoom = Some(match max_zoom {
            Some(max) if max >= 1.0 => max,
            _ => self.derived_max_zoom(),
        });

        self.slots.reset_bases();
        for slot in Slot::ALL {
            self.recompute_base(slot);
        }

        if reset {
            self.supplemental = Affine::IDENTITY;
        }
        if let Some(restore) = restore {
            self.supplemental = restore;
        }
    }

    /// Recomputes the base matrix of the active slot for the current view size.
    pub fn relayout(&mut self) {
        self.recompute_base(self.slots.active());
    }

    fn recompute_base(&mut self, slot: Slot) {
        let max_zoom = self.max_zoom();
        if let Some(image) = self.slots.get(slot) {
            let base = self
                .fit_mode
                .base_matrix(image.intrinsic_size(), self.view_size, max_zoom);
            self.slots.set_base(slot, base);
        }
    }

    /// The active image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        self.slots.active_image()
    }

    /// The active slot.
    #[must_use]
    pub fn active_slot(&self) -> Slot {
        self.slots.active()
    }

    /// Base matrix of the active slot.
    #[must_use]
    pub fn base_matrix(&self) -> Affine {
        self.slots.base(self.slots.active())
    }

    /// Copy of the supplemental matrix.
    ///
    /// Passing it back as `restore` to [`TransformModel::apply`] recreates the
    /// same user zoom and pan on a same-size image.
    #[must_use]
    pub fn display_matrix(&self) -> Affine {
        self.supplemental
    }

    /// Effective transform from intrinsic image pixels to view coordinates.
    #[must_use]
    pub fn image_matrix(&self) -> Affine {
        self.supplemental * self.base_matrix()
    }

    /// Current user scale (X scale of the supplemental matrix).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.supplemental.as_coeffs()[0]
    }

    /// X scale of the active base matrix.
    #[must_use]
    pub fn real_scale(&self) -> f64 {
        self.base_matrix().as_coeffs()[0]
    }

    /// The active image's intrinsic rectangle mapped into view coordinates.
    #[must_use]
    pub fn bitmap_rect(&self) -> Option<Rect> {
        let image = self.slots.active_image()?;
        let bounds = Rect::from_origin_size(Point::ORIGIN, image.intrinsic_size());
        Some(self.image_matrix().transform_rect_bbox(bounds))
    }

    /// Zooms to `scale` about `focus` (view coordinates), then re-centres.
    ///
    /// The scale is capped at the maximum zoom but deliberately not raised to
    /// the minimum, so pinch gestures can overshoot below it until release.
    pub fn zoom_to(&mut self, scale: f64, focus: Point) {
        let scale = scale.min(self.max_zoom());
        let old_scale = self.scale();
        if old_scale == 0.0 || !scale.is_finite() {
            return;
        }
        self.supplemental = self
            .supplemental
            .then_scale_about(scale / old_scale, focus);
        self.recenter();
    }

    /// Pans by `delta` after edge clamping, then re-centres.
    pub fn pan_by(&mut self, delta: Vec2) {
        let Some(rect) = self.bitmap_rect() else {
            return;
        };
        let delta = clamped_scroll(rect, self.view_size, delta);
        self.post_translate(delta);
        self.recenter();
    }

    /// Clamps a requested pan against the current image rectangle.
    #[must_use]
    pub fn clamped_scroll(&self, delta: Vec2) -> Vec2 {
        match self.bitmap_rect() {
            Some(rect) => clamped_scroll(rect, self.view_size, delta),
            None => Vec2::ZERO,
        }
    }

    /// Correction that would re-centre the image on both axes.
    #[must_use]
    pub fn center_correction(&self) -> Vec2 {
        match self.bitmap_rect() {
            Some(rect) => center_correction(rect, self.view_size, true, true),
            None => Vec2::ZERO,
        }
    }

    /// Re-centres the image on both axes.
    pub fn recenter(&mut self) {
        self.post_translate(self.center_correction());
    }

    fn post_translate(&mut self, delta: Vec2) {
        if delta != Vec2::ZERO {
            self.supplemental = self.supplemental.then_translate(delta);
        }
    }

    /// Checks whether the image can scroll horizontally in `direction`.
    ///
    /// A positive direction asks to reveal content further right (the finger
    /// moves left); a negative one asks for content further left. `visible` is
    /// the visible part of the view in view coordinates and `threshold` the
    /// distance below which an edge counts as reached.
    ///
    /// At an edge, the slot lying in that direction is offered as
    /// [`ScrollCheck::Switch`] when it holds an image and is not active.
    #[must_use]
    pub fn can_scroll(&self, direction: f64, visible: Rect, threshold: f64) -> ScrollCheck {
        let Some(rect) = self.bitmap_rect() else {
            return ScrollCheck::Blocked;
        };
        let (room, toward) = if direction > 0.0 {
            (rect.x1 - visible.x1, Slot::Right)
        } else if direction < 0.0 {
            (visible.x0 - rect.x0, Slot::Left)
        } else {
            return ScrollCheck::Blocked;
        };

        if room > threshold {
            ScrollCheck::Room
        } else if self.slots.can_switch_to(toward) {
            ScrollCheck::Switch(toward)
        } else {
            ScrollCheck::Blocked
        }
    }
}
