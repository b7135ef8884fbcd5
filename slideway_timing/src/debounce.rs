// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing debounce.
//!
//! ## Usage
//!
//! 1) Call [`Debounce::trigger`] every time the noisy source fires.
//! 2) Schedule a wake-up for [`Debounce::deadline`] (or simply poll on your next tick).
//! 3) Call [`Debounce::poll`]; it returns `true` exactly once per burst, after the
//!    source has been quiet for the configured delay.

/// Collapses a burst of triggers into one trailing firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates an idle debounce with the given quiet period.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Returns the configured quiet period.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Records a trigger at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.delay_ms));
    }

    /// Returns when the pending firing is due, if one is pending.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a trigger is waiting for its quiet period to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires if the quiet period has elapsed, consuming the pending trigger.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending trigger without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
