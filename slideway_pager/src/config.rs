// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration and host presets.
//!
//! Every host component (card carousel, date slider, navigation drawer) drives
//! the same engine and differs only in the values collected here.

use slideway_gesture::swipe::SwipeThresholds;
use slideway_timing::TimingFunction;
use smallvec::SmallVec;

use crate::animator::Stepping;
use crate::error::ConfigError;

/// One responsive rule: at `min_width` and wider, show `visible` items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    /// Container width threshold in pixels (inclusive).
    pub min_width: f64,
    /// Items shown at once from this width upward.
    pub visible: usize,
}

impl Breakpoint {
    /// Creates a breakpoint.
    #[must_use]
    pub const fn new(min_width: f64, visible: usize) -> Self {
        Self { min_width, visible }
    }
}

/// Ordered breakpoint table, kept largest threshold first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoints {
    rules: SmallVec<[Breakpoint; 4]>,
}

impl Breakpoints {
    /// Builds a table from rules in any order.
    pub fn new(rules: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut table = Self::default();
        for rule in rules {
            table.insert(rule);
        }
        table
    }

    /// Inserts a rule, keeping the table sorted largest threshold first.
    pub fn insert(&mut self, rule: Breakpoint) {
        let at = self
            .rules
            .iter()
            .position(|r| r.min_width < rule.min_width)
            .unwrap_or(self.rules.len());
        self.rules.insert(at, rule);
    }

    /// Returns the rules, largest threshold first.
    #[must_use]
    pub fn rules(&self) -> &[Breakpoint] {
        &self.rules
    }

    /// Returns `true` if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Visible item count for a container width.
    ///
    /// The first rule whose threshold is at or below `width` wins; with no
    /// match a single item is shown. The result is never zero.
    #[must_use]
    pub fn visible_for(&self, width: f64) -> usize {
        self.rules
            .iter()
            .find(|r| r.min_width <= width)
            .map_or(1, |r| r.visible.max(1))
    }
}

/// How much of the next item peeks in when only one item is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeekPolicy {
    /// Fraction of the container a lone item occupies, in `(0, 1]`.
    ///
    /// `1.0` disables the peek.
    pub single_item_factor: f64,
}

impl PeekPolicy {
    /// No peek: a lone item fills the container.
    pub const NONE: Self = Self {
        single_item_factor: 1.0,
    };

    /// Creates a policy with the given single-item factor.
    #[must_use]
    pub const fn new(single_item_factor: f64) -> Self {
        Self { single_item_factor }
    }

    /// Returns `true` if a lone item leaves room for its neighbor.
    #[must_use]
    pub fn peeks(&self) -> bool {
        self.single_item_factor < 1.0
    }
}

impl Default for PeekPolicy {
    fn default() -> Self {
        Self::new(0.85)
    }
}

/// Everything a host supplies to a [`Pager`](crate::Pager).
#[derive(Clone, Debug, PartialEq)]
pub struct PagerConfig {
    /// Responsive visible-count table.
    pub breakpoints: Breakpoints,
    /// Space between neighboring items, in pixels.
    pub gap: f64,
    /// Length of one slide, in milliseconds.
    pub duration_ms: u64,
    /// Extra time the controls stay disabled after a slide ends.
    pub settle_ms: u64,
    /// Single-item peek.
    pub peek: PeekPolicy,
    /// Swipe recognition thresholds.
    pub swipe: SwipeThresholds,
    /// How the slide transform is driven.
    pub stepping: Stepping,
    /// Easing used for the slide.
    pub timing: TimingFunction,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::card_carousel()
    }
}

impl PagerConfig {
    /// Card carousel: 3 cards from 1024px, 2 from 768px, otherwise one card
    /// with a peek of the next.
    #[must_use]
    pub fn card_carousel() -> Self {
        Self {
            breakpoints: Breakpoints::new([Breakpoint::new(1024.0, 3), Breakpoint::new(768.0, 2)]),
            gap: 24.0,
            duration_ms: 500,
            settle_ms: 50,
            peek: PeekPolicy::default(),
            swipe: SwipeThresholds::DEFAULT,
            stepping: Stepping::frames(),
            timing: TimingFunction::EaseInOut,
        }
    }

    /// Event-date slider: 4 entries from 1200px, 2 from 650px.
    #[must_use]
    pub fn date_slider() -> Self {
        Self {
            breakpoints: Breakpoints::new([Breakpoint::new(1200.0, 4), Breakpoint::new(650.0, 2)]),
            gap: 16.0,
            duration_ms: 400,
            settle_ms: 50,
            peek: PeekPolicy::new(0.8),
            swipe: SwipeThresholds::DEFAULT,
            stepping: Stepping::Transition,
            timing: TimingFunction::EASE,
        }
    }

    /// Navigation-drawer panels: one full-width panel at every size.
    #[must_use]
    pub fn nav_drawer() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gap: 0.0,
            duration_ms: 300,
            settle_ms: 20,
            peek: PeekPolicy::NONE,
            swipe: SwipeThresholds::DEFAULT,
            stepping: Stepping::Transition,
            timing: TimingFunction::EaseOut,
        }
    }

    /// Replaces the breakpoint table.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the inter-item gap.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the slide duration.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the post-slide settle margin.
    #[must_use]
    pub fn with_settle(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Sets the single-item peek.
    #[must_use]
    pub fn with_peek(mut self, peek: PeekPolicy) -> Self {
        self.peek = peek;
        self
    }

    /// Sets the swipe thresholds.
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeThresholds) -> Self {
        self.swipe = swipe;
        self
    }

    /// Sets the stepping strategy.
    #[must_use]
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Checks that the configuration can produce a usable layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in self.breakpoints.rules() {
            if !rule.min_width.is_finite() || rule.min_width < 0.0 {
                return Err(ConfigError::InvalidBreakpointWidth(rule.min_width));
            }
            if rule.visible == 0 {
                return Err(ConfigError::ZeroVisible {
                    min_width: rule.min_width,
                });
            }
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        let factor = self.peek.single_item_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::InvalidPeekFactor(factor));
        }
        if self.stepping == (Stepping::Frames { steps: 0 }) {
            return Err(ConfigError::ZeroFrames);
        }
        let distance = self.swipe.min_distance;
        if !(distance.is_finite() && distance > 0.0) {
            return Err(ConfigError::InvalidSwipeDistance(distance));
        }
        Ok(())
    }
}
