// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ImageTouch Gesture: turns touch input into the transform of an image view.
//!
//! [`ImageViewTouch`] combines a [`TransformModel`] and an [`AnimationDriver`]
//! with a small interaction state machine:
//!
//! - `Idle` → `Dragging` on pointer-down, which also arms a long-press trigger.
//! - `Dragging` → `OneHandZooming` when the long press comes due; vertical
//!   movement then zooms about the down position.
//! - Any state → `PinchScaling` while the host's pinch recognizer reports a pinch.
//! - Back to `Idle` on pointer-up or cancel, restoring the minimum zoom.
//!
//! Entering and leaving the two zooming states is reported exactly once
//! through [`TouchListener::on_image_scaling`].
//!
//! The crate does not recognize gestures itself. Hosts forward raw pointer
//! events to [`ImageViewTouch::on_pointer`] and the output of their platform
//! recognizers through [`PinchListener`], [`DragListener`] and [`TapListener`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use imagetouch_gesture::{
//!     DragListener, FlingSample, HostRequests, ImageViewTouch, TouchConfig,
//! };
//! use web_time::Instant;
//!
//! let mut view = ImageViewTouch::new(TouchConfig::default());
//! view.on_layout(Size::new(400.0, 400.0));
//! view.set_image(Some(Size::new(800.0, 800.0)), true);
//! view.zoom_to(2.0);
//!
//! let now = Instant::now();
//! let fling = FlingSample {
//!     origin: Point::new(300.0, 200.0),
//!     position: Point::new(180.0, 200.0),
//!     velocity: Vec2::new(-900.0, 0.0),
//!     pointer_count: 1,
//!     time: now,
//! };
//! assert!(view.on_fling(&fling));
//!
//! let mut frame = now;
//! while view.tick(frame) {
//!     frame += Duration::from_millis(16);
//! }
//! assert!(view.take_requests().contains(HostRequests::REDRAW));
//! let left = view.bitmap_rect().map_or(0.0, |r| r.x0);
//! assert!((left + 260.0).abs() < 1e-9);
//! ```
//!
//! State transitions, animations and layout are logged with `tracing` at
//! `debug`; slot switches and disposal at `info`.

mod config;
mod events;
mod interaction;
mod listener;
mod long_press;
mod policy;
mod recognizers;
mod session;
mod touch;
mod view;

pub use config::TouchConfig;
pub use events::{DragSample, FlingSample, PointerAction, PointerEvent};
pub use interaction::InteractionState;
pub use listener::{DragListener, HostRequests, PinchListener, TapListener, TouchListener};
pub use long_press::DelayedTrigger;
pub use policy::{DoubleTapPolicy, ResetScale, StepZoom};
pub use session::PointerSession;
pub use view::{Assignment, ImageViewTouch};

pub use imagetouch_animation::{AnimationDriver, Curve, EaseMode, Easing};
pub use imagetouch_transform::{FitMode, Image, Slot, TransformModel};
