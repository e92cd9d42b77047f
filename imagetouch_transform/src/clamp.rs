// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge clamping and re-centering of a mapped image rectangle.
//!
//! Both helpers take the image rectangle in view coordinates and the view
//! size, and return the translation to apply. They never move content that
//! already satisfies containment.

use kurbo::{Rect, Size, Vec2};

/// Clamps a requested pan so the image edges never cross the view edges.
///
/// On each axis:
/// - if the image already lies entirely inside the view, movement is dropped;
/// - otherwise the near edge may not move past `0` and the far edge may not
///   retreat inside the view's far boundary.
#[must_use]
pub fn clamped_scroll(bitmap: Rect, view: Size, delta: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(bitmap.x0, bitmap.x1, view.width, delta.x),
        clamp_axis(bitmap.y0, bitmap.y1, view.height, delta.y),
    )
}

fn clamp_axis(near: f64, far: f64, extent: f64, delta: f64) -> f64 {
    let mut delta = delta;
    if near >= 0.0 && far <= extent {
        delta = 0.0;
    }
    if near + delta >= 0.0 && far > extent {
        delta = -near;
    }
    if far + delta <= extent && near < 0.0 {
        delta = extent - far;
    }
    delta
}

/// Computes the correction that re-centres the image on the enabled axes.
///
/// Content smaller than the view is centred. Larger content is pulled back
/// so that its near edge sits at `0` or its far edge at the view boundary.
#[must_use]
pub fn center_correction(bitmap: Rect, view: Size, horizontal: bool, vertical: bool) -> Vec2 {
    let dx = if horizontal {
        center_axis(bitmap.x0, bitmap.x1, view.width)
    } else {
        0.0
    };
    let dy = if vertical {
        center_axis(bitmap.y0, bitmap.y1, view.height)
    } else {
        0.0
    };
    Vec2::new(dx, dy)
}

fn center_axis(near: f64, far: f64, extent: f64) -> f64 {
    let length = far - near;
    if length < extent {
        (extent - length) / 2.0 - near
    } else if near > 0.0 {
        -near
    } else if far < extent {
        extent - far
    } else {
        0.0
    }
}
