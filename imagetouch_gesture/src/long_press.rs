// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use web_time::Instant;

/// A cancellable delayed trigger.
///
/// Stands in for a posted delayed callback: the owner arms it with a deadline
/// and polls it from its event loop. A trigger fires at most once per arming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelayedTrigger {
    deadline: Option<Instant>,
}

impl DelayedTrigger {
    /// Arms the trigger to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancels the pending deadline, if any.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires if the deadline has passed. Firing disarms the trigger.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
