// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};

/// Hard ceiling for the derived maximum zoom.
pub const MAX_ZOOM_CEILING: f64 = 3.0;

/// How an image is scaled into the view before any user interaction.
///
/// The fit mode only shapes the base matrix. User zoom and pan live in the
/// supplemental matrix and are reset whenever the fit mode changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale uniformly so the whole image fits inside the view.
    #[default]
    FitSmall,
    /// Scale uniformly along the longer view axis.
    ///
    /// In a landscape view the image width matches the view width; otherwise
    /// the image height matches the view height. The other axis may overflow.
    FitBig,
    /// Scale uniformly so the image width matches the view width.
    FitWidth,
    /// Scale uniformly so the image height matches the view height.
    FitHeight,
    /// Stretch each axis independently so the image covers the view exactly.
    Fill,
}

impl FitMode {
    /// Computes the base matrix mapping intrinsic image pixels into the view.
    ///
    /// Per-axis scales are capped at `max_zoom`. A zero-sized image or view is
    /// not ready for layout and yields [`Affine::IDENTITY`].
    #[must_use]
    pub fn base_matrix(self, image: Size, view: Size, max_zoom: f64) -> Affine {
        if !is_measurable(image) || !is_measurable(view) {
            return Affine::IDENTITY;
        }
        let width_scale = (view.width / image.width).min(max_zoom);
        let height_scale = (view.height / image.height).min(max_zoom);

        match self {
            Self::FitSmall => Affine::scale(width_scale.min(height_scale)),
            Self::FitBig => {
                if view.width > view.height {
                    Affine::scale(width_scale)
                } else {
                    Affine::scale(height_scale)
                }
            }
            Self::FitWidth => Affine::scale(width_scale),
            Self::FitHeight => Affine::scale(height_scale),
            Self::Fill => Affine::scale_non_uniform(width_scale, height_scale),
        }
    }
}

/// Which of the two image slots is meant.
///
/// Slot indices follow page order for right-to-left reading: the "right"
/// page sits in slot `0` and the "left" page in slot `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// Slot `0`, revealed by dragging content to the left.
    #[default]
    Right,
    /// Slot `1`, revealed by dragging content to the right.
    Left,
}

impl Slot {
    /// Both slots in index order.
    pub const ALL: [Self; 2] = [Self::Right, Self::Left];

    /// Array index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
        }
    }

    /// The opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Derives the maximum zoom for an image shown in a view of the given size.
///
/// The image may be magnified until its shorter fill ratio reaches four times
/// the view, capped at [`MAX_ZOOM_CEILING`]. Returns `1.0` while either size
/// is still zero.
#[must_use]
pub fn derive_max_zoom(image: Size, view: Size) -> f64 {
    if !is_measurable(image) || !is_measurable(view) {
        return 1.0;
    }
    let fw = image.width / view.width;
    let fh = image.height / view.height;
    ((1.0 / fw.min(fh)) * 4.0).min(MAX_ZOOM_CEILING)
}

pub(crate) fn is_measurable(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}
