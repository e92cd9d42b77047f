// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use imagetouch_transform::{DEFAULT_MIN_ZOOM, FitMode};

/// Feature switches, thresholds and durations of an [`ImageViewTouch`].
///
/// [`ImageViewTouch`]: crate::ImageViewTouch
#[derive(Clone, Debug, PartialEq)]
pub struct TouchConfig {
    /// Double-tap zooms (default: true).
    pub double_tap_enabled: bool,
    /// Pinch gestures zoom (default: true).
    pub scale_enabled: bool,
    /// Long-press then vertical drag zooms (default: true).
    pub one_hand_scale_enabled: bool,
    /// Drag and fling pan (default: true).
    pub scroll_enabled: bool,
    /// Minimum zoom enforced at gesture end (default: 0.1).
    pub min_zoom: f64,
    /// Maximum zoom used when an assignment supplies none (default: derived).
    ///
    /// Values below `1.0` are raised to `1.0` by
    /// [`ImageViewTouch::set_default_max_zoom`](crate::ImageViewTouch::set_default_max_zoom).
    pub default_max_zoom: Option<f64>,
    /// How images are fitted into the view (default: fit-small).
    pub fit_mode: FitMode,
    /// Hold time before a press turns into one-hand zoom (default: 300ms).
    pub long_press_timeout: Duration,
    /// Finger travel that cancels a pending long press (default: 8px).
    pub touch_slop: f64,
    /// Duration of the double-tap zoom (default: 200ms).
    pub double_tap_duration: Duration,
    /// Duration of the fling scroll (default: 300ms).
    pub fling_duration: Duration,
    /// Release speed on either axis above which a fling scrolls (default: 800).
    pub fling_velocity_threshold: f64,
    /// Duration of the zoom back to the minimum after a gesture (default: 50ms).
    pub min_zoom_restore_duration: Duration,
    /// Duration of [`ImageViewTouch::center_to`](crate::ImageViewTouch::center_to) scrolls (default: 500ms).
    pub center_duration: Duration,
    /// Horizontal drag past an edge that switches image slots (default: 75px).
    pub page_switch_margin: f64,
    /// Distance under which an edge counts as reached (default: 1px).
    pub scroll_delta_threshold: f64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            double_tap_enabled: true,
            scale_enabled: true,
            one_hand_scale_enabled: true,
            scroll_enabled: true,
            min_zoom: DEFAULT_MIN_ZOOM,
            default_max_zoom: None,
            fit_mode: FitMode::FitSmall,
            long_press_timeout: Duration::from_millis(300),
            touch_slop: 8.0,
            double_tap_duration: Duration::from_millis(200),
            fling_duration: Duration::from_millis(300),
            fling_velocity_threshold: 800.0,
            min_zoom_restore_duration: Duration::from_millis(50),
            center_duration: Duration::from_millis(500),
            page_switch_margin: 75.0,
            scroll_delta_threshold: 1.0,
        }
    }
}
