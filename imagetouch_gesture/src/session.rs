// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer session: where the current touch sequence went down and where it
//! was last seen.
//!
//! ## Usage
//!
//! 1) Call [`PointerSession::begin`] on pointer-down.
//! 2) On every move, [`PointerSession::advance`] returns the movement since the
//!    previous position; [`PointerSession::travel`] the movement since down.
//! 3) [`PointerSession::end`] on pointer-up or cancel.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use imagetouch_gesture::PointerSession;
//!
//! let mut session = PointerSession::default();
//! session.begin(Point::new(100.0, 200.0));
//!
//! assert_eq!(session.advance(Point::new(90.0, 230.0)), Some(Vec2::new(-10.0, 30.0)));
//! assert!(session.exceeds_slop(Point::new(90.0, 230.0), 8.0));
//! ```

use kurbo::{Point, Vec2};

/// Positions tracked for one touch sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSession {
    origin: Option<Point>,
    last: Option<Point>,
}

impl PointerSession {
    /// Starts a session at `position`.
    pub fn begin(&mut self, position: Point) {
        self.origin = Some(position);
        self.last = Some(position);
    }

    /// Records `position` and returns the movement since the previous one.
    ///
    /// Returns `None` outside a session.
    pub fn advance(&mut self, position: Point) -> Option<Vec2> {
        self.origin?;
        let delta = self.last.map_or(Vec2::ZERO, |last| position - last);
        self.last = Some(position);
        Some(delta)
    }

    /// Movement from the down position to `position`.
    #[must_use]
    pub fn travel(&self, position: Point) -> Option<Vec2> {
        self.origin.map(|origin| position - origin)
    }

    /// Returns `true` if `position` is further than `slop` from the down position.
    #[must_use]
    pub fn exceeds_slop(&self, position: Point, slop: f64) -> bool {
        self.travel(position)
            .is_some_and(|travel| travel.hypot2() > slop * slop)
    }

    /// Where the session started.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// The last recorded position.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }

    /// Ends the session.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
