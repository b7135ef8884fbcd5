// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognizer: classify a touch sequence as a horizontal swipe.
//!
//! ## Usage
//!
//! 1) On touch start, call [`SwipeRecognizer::on_start`] with the position and timestamp.
//! 2) On touch end, call [`SwipeRecognizer::on_end`]; the start sample is consumed
//!    whatever the outcome.
//! 3) On touch cancel, call [`SwipeRecognizer::cancel`].
//!
//! A touch qualifies when it finished within [`SwipeThresholds::max_elapsed_ms`],
//! travelled at least [`SwipeThresholds::min_distance`] horizontally, and moved
//! more horizontally than vertically. Anything else is reported as
//! [`SwipeResult::Ignored`] and should be left to the platform (for example so
//! the page can keep scrolling vertically).

use kurbo::Point;

/// Thresholds a touch must meet to count as a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum absolute horizontal travel, in pixels.
    pub min_distance: f64,
    /// Maximum time between start and end, in milliseconds (inclusive).
    pub max_elapsed_ms: u64,
}

impl SwipeThresholds {
    /// 20 px within 100 ms.
    pub const DEFAULT: Self = Self {
        min_distance: 20.0,
        max_elapsed_ms: 100,
    };
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Horizontal direction the finger travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// The finger moved toward smaller x.
    Left,
    /// The finger moved toward larger x.
    Right,
}

/// Why a touch sequence did not qualify as a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// `on_end` arrived without a matching `on_start`.
    NotStarted,
    /// The touch lasted longer than the allowed time.
    TooSlow,
    /// The horizontal travel was below the minimum distance.
    TooShort,
    /// The touch moved more vertically than horizontally.
    Vertical,
}

/// Outcome of [`SwipeRecognizer::on_end`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeResult {
    /// A qualifying horizontal swipe.
    Swipe {
        /// Which way the finger moved.
        direction: SwipeDirection,
        /// Signed horizontal travel (`end.x - start.x`).
        distance: f64,
        /// Time between start and end.
        elapsed_ms: u64,
    },
    /// The touch was not a swipe.
    Ignored(IgnoreReason),
}

impl SwipeResult {
    /// Returns the swipe direction, if the touch qualified.
    #[must_use]
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::Swipe { direction, .. } => Some(*direction),
            Self::Ignored(_) => None,
        }
    }

    /// Returns `true` if the host should suppress default handling of the touch.
    ///
    /// Only recognized horizontal swipes are claimed.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Swipe { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    pos: Point,
    time: u64,
}

/// Per-surface swipe recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeRecognizer {
    thresholds: SwipeThresholds,
    start: Option<Sample>,
}

impl SwipeRecognizer {
    /// Creates a recognizer with custom thresholds.
    #[must_use]
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            start: None,
        }
    }

    /// Returns the active thresholds.
    #[must_use]
    pub fn thresholds(&self) -> SwipeThresholds {
        self.thresholds
    }

    /// Replaces the thresholds. A touch in progress keeps its start sample.
    pub fn set_thresholds(&mut self, thresholds: SwipeThresholds) {
        self.thresholds = thresholds;
    }

    /// Records the start of a touch. A second start replaces the first.
    pub fn on_start(&mut self, pos: Point, time: u64) {
        self.start = Some(Sample { pos, time });
    }

    /// Returns `true` between `on_start` and `on_end`/`cancel`.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Classifies the touch that ends at `pos`/`time` and forgets the start sample.
    pub fn on_end(&mut self, pos: Point, time: u64) -> SwipeResult {
        let Some(start) = self.start.take() else {
            return SwipeResult::Ignored(IgnoreReason::NotStarted);
        };
        let delta = pos - start.pos;
        let elapsed_ms = time.saturating_sub(start.time);

        if elapsed_ms > self.thresholds.max_elapsed_ms {
            return SwipeResult::Ignored(IgnoreReason::TooSlow);
        }
        let dx = delta.x.abs();
        let min = self.thresholds.min_distance;
        // Zero travel has no direction; NaN thresholds never qualify.
        if dx == 0.0 || min.is_nan() || dx < min {
            return SwipeResult::Ignored(IgnoreReason::TooShort);
        }
        if delta.y.abs() > dx {
            return SwipeResult::Ignored(IgnoreReason::Vertical);
        }

        let direction = if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        SwipeResult::Swipe {
            direction,
            distance: delta.x,
            elapsed_ms,
        }
    }

    /// Discards the start sample without classifying (touch cancel, teardown).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
