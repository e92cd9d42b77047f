// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Picks the scale a double tap zooms to.
///
/// The view clamps the answer to `[min_zoom, max_zoom]`.
pub trait DoubleTapPolicy {
    /// Target scale for a double tap at the current `scale`.
    fn target_scale(&mut self, scale: f64, max_zoom: f64) -> f64;

    /// Forgets any per-gesture progress. Called when a pinch begins.
    fn reset(&mut self) {}
}

/// Double tap always returns to the fitted scale.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResetScale;

impl DoubleTapPolicy for ResetScale {
    fn target_scale(&mut self, _scale: f64, _max_zoom: f64) -> f64 {
        1.0
    }
}

/// Double tap zooms in by thirds of the maximum zoom, then back to `1.0`.
///
/// From the fitted scale each tap adds `max_zoom / 3` until the next step
/// would pass `max_zoom`; that tap lands on `max_zoom` exactly and the one
/// after returns to `1.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepZoom {
    zooming_in: Option<bool>,
}

impl DoubleTapPolicy for StepZoom {
    fn target_scale(&mut self, scale: f64, max_zoom: f64) -> f64 {
        let step = max_zoom / 3.0;
        let zooming_in = *self.zooming_in.get_or_insert(true);
        if !zooming_in {
            self.zooming_in = Some(true);
            return 1.0;
        }
        if scale + step * 2.0 <= max_zoom {
            scale + step
        } else {
            self.zooming_in = Some(false);
            max_zoom
        }
    }

    fn reset(&mut self) {
        self.zooming_in = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DoubleTapPolicy, ResetScale, StepZoom};

    #[test]
    fn reset_scale_always_answers_one() {
        let mut p = ResetScale;
        assert_eq!(p.target_scale(2.7, 3.0), 1.0);
        assert_eq!(p.target_scale(0.4, 3.0), 1.0);
    }

    #[test]
    fn step_zoom_cycles() {
        let mut p = StepZoom::default();
        let a = p.target_scale(1.0, 3.0);
        assert_eq!(a, 2.0);
        let b = p.target_scale(a, 3.0);
        assert_eq!(b, 3.0);
        assert_eq!(p.target_scale(b, 3.0), 1.0);
        assert_eq!(p.target_scale(1.0, 3.0), 2.0);
    }

    #[test]
    fn step_zoom_reset_restarts_cycle() {
        let mut p = StepZoom::default();
        p.target_scale(1.0, 3.0);
        p.target_scale(2.0, 3.0);
        p.reset();
        assert_eq!(p.target_scale(1.0, 3.0), 2.0);
    }
}
