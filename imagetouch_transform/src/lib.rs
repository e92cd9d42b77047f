// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ImageTouch Transform: the transform model behind a touch image view.
//!
//! This crate is a small, headless model of how one image (out of a pair of
//! candidate images) is mapped into a view. It focuses on:
//! - Base matrices per [`FitMode`] (fit-small, fit-big, fit-width, fit-height, fill).
//! - A supplemental matrix carrying user zoom and pan.
//! - Zoom bounds, including the maximum zoom derived from image and view size.
//! - Edge-clamped panning and re-centering after every mutation.
//! - Edge detection for switching between the two image [`Slot`]s.
//!
//! It does **not** decode images, draw, or interpret input events. Callers
//! (for example `imagetouch_gesture`) feed it sizes, zoom requests and pan
//! deltas, and read back the effective [`kurbo::Affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use imagetouch_transform::{FitMode, Slot, TransformModel};
//!
//! let mut model = TransformModel::new();
//! model.set_view_size(Size::new(1000.0, 1000.0));
//! model.set_fit_mode(FitMode::FitWidth);
//! model.set_images([Some(Size::new(2000.0, 1000.0)), None], Slot::Right);
//! model.apply(true, None, None);
//! model.recenter();
//!
//! assert_eq!(model.bitmap_rect(), Some(Rect::new(0.0, 250.0, 1000.0, 750.0)));
//!
//! // Zoom in about the view centre, then try to pan past the left edge.
//! model.zoom_to(2.0, Point::new(500.0, 500.0));
//! model.pan_by(Vec2::new(5000.0, 0.0));
//! assert_eq!(model.bitmap_rect().map(|r| r.x0), Some(0.0));
//! ```
//!
//! ## Design notes
//!
//! - "Scale" is the X scale of the supplemental matrix; `1.0` is "as fitted".
//! - [`TransformModel::zoom_to`] caps at the maximum zoom only. The minimum is
//!   enforced by whoever ends a gesture, so pinches may overshoot below it.
//! - Zero-sized views or images are treated as "not laid out yet": the maximum
//!   zoom falls back to `1.0`, base matrices to identity, and nothing produces
//!   non-finite values.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod model;
mod modes;
mod slots;

pub use clamp::{center_correction, clamped_scroll};
pub use model::{DEFAULT_MIN_ZOOM, ScrollCheck, TransformModel};
pub use modes::{FitMode, MAX_ZOOM_CEILING, Slot, derive_max_zoom};
pub use slots::{Image, SlotPair};
