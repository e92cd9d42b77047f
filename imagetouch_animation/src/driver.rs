// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooperative animation driver.
//!
//! ## Usage
//!
//! 1) Start a scroll with [`AnimationDriver::scroll_by`] or a zoom with
//!    [`AnimationDriver::zoom_to`].
//! 2) On every frame (or event-loop turn) call [`AnimationDriver::tick`] with
//!    the current wall-clock time and the [`AnimationTarget`] to mutate.
//! 3) Keep ticking while `tick` returns `true`.
//!
//! Ticks never assume a fixed frame interval: each one re-reads the elapsed
//! time since the task started, so a late tick simply jumps further along the
//! curve and the total motion stays exact.

use core::time::Duration;

use kurbo::{Point, Vec2};
use web_time::Instant;

use crate::easing::Easing;

/// What an animation mutates.
pub trait AnimationTarget {
    /// Current user scale.
    fn scale(&self) -> f64;
    /// Pans by `delta`, subject to the target's own clamping.
    fn pan_by(&mut self, delta: Vec2);
    /// Zooms to an absolute `scale` about `focus`.
    fn zoom_to(&mut self, scale: f64, focus: Point);
    /// Translation that would re-centre the content, or zero.
    fn center_correction(&self) -> Vec2;
}

#[derive(Clone, Copy, Debug)]
struct ScrollTask {
    start: Instant,
    duration: Duration,
    total: Vec2,
    applied: Vec2,
}

#[derive(Clone, Copy, Debug)]
struct ZoomTask {
    start: Instant,
    duration: Duration,
    from: f64,
    to: f64,
    focus: Point,
}

/// Drives at most one scroll and one zoom animation.
///
/// Starting a new animation of a kind replaces the running one of that kind.
/// Direct manipulation of the target in between ticks is not cancelled:
/// scroll ticks apply only their own increment since the previous tick, so
/// both contributions add up.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    easing: Easing,
    scroll: Option<ScrollTask>,
    zoom: Option<ZoomTask>,
}

impl AnimationDriver {
    /// Creates an idle driver using cubic ease-out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle driver with the given easing.
    #[must_use]
    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    /// Easing applied to new and running animations.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the easing.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Starts scrolling the target by `delta` over `duration`.
    pub fn scroll_by(&mut self, delta: Vec2, duration: Duration, now: Instant) {
        tracing::debug!(dx = delta.x, dy = delta.y, ?duration, "scroll animation started");
        self.scroll = Some(ScrollTask {
            start: now,
            duration,
            total: delta,
            applied: Vec2::ZERO,
        });
    }

    /// Starts zooming the target from its current scale to `scale` about `focus`.
    ///
    /// A zero `duration` zooms immediately and starts no task.
    pub fn zoom_to<T: AnimationTarget + ?Sized>(
        &mut self,
        target: &mut T,
        scale: f64,
        focus: Point,
        duration: Duration,
        now: Instant,
    ) {
        if duration.is_zero() {
            target.zoom_to(scale, focus);
            return;
        }
        let from = target.scale();
        tracing::debug!(from, to = scale, ?duration, "zoom animation started");
        self.zoom = Some(ZoomTask {
            start: now,
            duration,
            from,
            to: scale,
            focus,
        });
    }

    /// Returns `true` while any animation is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroll.is_some() || self.zoom.is_some()
    }

    /// Returns `true` while a scroll animation is pending.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Returns `true` while a zoom animation is pending.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zoom.is_some()
    }

    /// Drops every pending animation without touching the target.
    pub fn cancel(&mut self) {
        self.scroll = None;
        self.zoom = None;
    }

    /// Advances all animations to `now`. Returns `true` if more ticks are needed.
    pub fn tick<T: AnimationTarget + ?Sized>(&mut self, now: Instant, target: &mut T) -> bool {
        if let Some(task) = self.zoom {
            self.zoom = self.step_zoom(task, now, target);
        }
        if let Some(task) = self.scroll {
            self.scroll = self.step_scroll(task, now, target);
        }
        self.is_animating()
    }

    fn step_zoom<T: AnimationTarget + ?Sized>(
        &self,
        task: ZoomTask,
        now: Instant,
        target: &mut T,
    ) -> Option<ZoomTask> {
        let elapsed = now.saturating_duration_since(task.start).min(task.duration);
        let scale = if elapsed < task.duration {
            self.easing
                .interpolate(elapsed, task.from, task.to - task.from, task.duration)
        } else {
            task.to
        };
        tracing::trace!(scale, ?elapsed, "zoom tick");
        target.zoom_to(scale, task.focus);

        if elapsed < task.duration {
            Some(task)
        } else {
            tracing::debug!(scale = target.scale(), "zoom animation finished");
            None
        }
    }

    fn step_scroll<T: AnimationTarget + ?Sized>(
        &self,
        mut task: ScrollTask,
        now: Instant,
        target: &mut T,
    ) -> Option<ScrollTask> {
        let elapsed = now.saturating_duration_since(task.start).min(task.duration);
        let position = Vec2::new(
            self.easing
                .interpolate(elapsed, 0.0, task.total.x, task.duration),
            self.easing
                .interpolate(elapsed, 0.0, task.total.y, task.duration),
        );
        let step = position - task.applied;
        tracing::trace!(dx = step.x, dy = step.y, ?elapsed, "scroll tick");
        target.pan_by(step);
        task.applied = position;

        if elapsed < task.duration {
            return Some(task);
        }
        let correction = target.center_correction();
        if correction != Vec2::ZERO {
            target.pan_by(correction);
        }
        tracing::debug!("scroll animation finished");
        None
    }
}
