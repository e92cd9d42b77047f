// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.
//!
//! Curves are evaluated on normalized progress in `[0, 1]`;
//! [`Easing::interpolate`] lifts that to the classic
//! `(elapsed, start, change, duration)` form used by the animation driver.

use core::f64::consts::PI;
use core::time::Duration;

/// Shape of an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Quadratic.
    Quad,
    /// Cubic.
    #[default]
    Cubic,
    /// Quarter sine wave.
    Sine,
}

/// Which end of the curve is slow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EaseMode {
    /// Starts slow, accelerates.
    In,
    /// Starts fast, decelerates.
    #[default]
    Out,
    /// Slow at both ends.
    InOut,
}

/// An easing function: a [`Curve`] applied in an [`EaseMode`].
///
/// The default is cubic ease-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Easing {
    /// Curve shape.
    pub curve: Curve,
    /// Curve direction.
    pub mode: EaseMode,
}

impl Easing {
    /// Linear interpolation.
    pub const LINEAR: Self = Self::new(Curve::Linear, EaseMode::InOut);
    /// Cubic ease-out.
    pub const CUBIC_OUT: Self = Self::new(Curve::Cubic, EaseMode::Out);

    /// Creates an easing from a curve and a mode.
    #[must_use]
    pub const fn new(curve: Curve, mode: EaseMode) -> Self {
        Self { curve, mode }
    }

    /// Maps progress in `[0, 1]` (clamped) to eased progress.
    ///
    /// Every curve maps `0` to `0` and `1` to `1`.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self.mode {
            EaseMode::In => self.curve.ease_in(t),
            EaseMode::Out => 1.0 - self.curve.ease_in(1.0 - t),
            EaseMode::InOut => {
                if t < 0.5 {
                    self.curve.ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - self.curve.ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }

    /// Value at `elapsed` of a transition from `start` by `change` over `duration`.
    ///
    /// A zero `duration` is already complete and yields `start + change`.
    #[must_use]
    pub fn interpolate(self, elapsed: Duration, start: f64, change: f64, duration: Duration) -> f64 {
        if duration.is_zero() {
            return start + change;
        }
        let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
        start + change * self.apply(progress)
    }
}

impl Curve {
    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Sine => 1.0 - (t * PI / 2.0).cos(),
        }
    }
}
