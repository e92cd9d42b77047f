// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ImageTouch Animation: easing curves and a cooperative animation driver.
//!
//! Animations here are not threads or timers. An [`AnimationDriver`] holds at
//! most one scroll task and one zoom task; the host calls
//! [`AnimationDriver::tick`] from its event loop with the current wall-clock
//! time and keeps doing so while it returns `true`.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use imagetouch_animation::{AnimationDriver, AnimationTarget};
//! use web_time::Instant;
//!
//! struct Offset(Vec2);
//!
//! impl AnimationTarget for Offset {
//!     fn scale(&self) -> f64 { 1.0 }
//!     fn pan_by(&mut self, delta: Vec2) { self.0 += delta; }
//!     fn zoom_to(&mut self, _scale: f64, _focus: Point) {}
//!     fn center_correction(&self) -> Vec2 { Vec2::ZERO }
//! }
//!
//! let start = Instant::now();
//! let mut driver = AnimationDriver::new();
//! let mut target = Offset(Vec2::ZERO);
//! driver.scroll_by(Vec2::new(60.0, 0.0), Duration::from_millis(300), start);
//!
//! let mut frame = start;
//! while driver.tick(frame, &mut target) {
//!     frame += Duration::from_millis(16);
//! }
//! assert!((target.0.x - 60.0).abs() < 1e-9);
//! ```
//!
//! Progress is logged through `tracing` at `debug` (task start and finish) and
//! `trace` (every tick).

mod driver;
mod easing;

pub use driver::{AnimationDriver, AnimationTarget};
pub use easing::{Curve, EaseMode, Easing};
