// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};

use crate::modes::Slot;

/// An image the model can lay out.
///
/// The model never looks at pixels; it only needs the intrinsic size.
pub trait Image {
    /// Intrinsic width and height in image pixels.
    fn intrinsic_size(&self) -> Size;
}

impl Image for Size {
    fn intrinsic_size(&self) -> Size {
        *self
    }
}

impl<T: Image + ?Sized> Image for &T {
    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }
}

/// Two optional images, each with its own base matrix, one of them active.
#[derive(Clone, Debug)]
pub struct SlotPair<I> {
    images: [Option<I>; 2],
    bases: [Affine; 2],
    active: Slot,
}

impl<I> Default for SlotPair<I> {
    fn default() -> Self {
        Self {
            images: [None, None],
            bases: [Affine::IDENTITY; 2],
            active: Slot::default(),
        }
    }
}

impl<I> SlotPair<I> {
    /// Creates an empty pair with [`Slot::Right`] active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both images, resets both base matrices and activates `active`.
    pub fn replace(&mut self, images: [Option<I>; 2], active: Slot) {
        self.images = images;
        self.bases = [Affine::IDENTITY; 2];
        self.active = active;
    }

    /// Drops both images.
    pub fn clear(&mut self) {
        self.replace([None, None], Slot::default());
    }

    /// The active slot.
    #[must_use]
    pub fn active(&self) -> Slot {
        self.active
    }

    /// Makes `slot` the active slot. Its base matrix is kept as is.
    pub fn set_active(&mut self, slot: Slot) {
        self.active = slot;
    }

    /// The image in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&I> {
        self.images[slot.index()].as_ref()
    }

    /// The image in the active slot, if any.
    #[must_use]
    pub fn active_image(&self) -> Option<&I> {
        self.get(self.active)
    }

    /// Returns `true` if `slot` holds an image and is not already active.
    #[must_use]
    pub fn can_switch_to(&self, slot: Slot) -> bool {
        slot != self.active && self.get(slot).is_some()
    }

    /// Base matrix of `slot`.
    #[must_use]
    pub fn base(&self, slot: Slot) -> Affine {
        self.bases[slot.index()]
    }

    pub(crate) fn set_base(&mut self, slot: Slot, base: Affine) {
        self.bases[slot.index()] = base;
    }

    pub(crate) fn reset_bases(&mut self) {
        self.bases = [Affine::IDENTITY; 2];
    }
}
