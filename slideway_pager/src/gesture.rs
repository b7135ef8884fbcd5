// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe bridge: turns touch sequences on the pager surface into paging intents.

use kurbo::Point;
use slideway_gesture::swipe::{SwipeDirection, SwipeRecognizer, SwipeResult, SwipeThresholds};

use crate::position::Direction;

/// Maps finger travel onto paging direction.
///
/// Dragging right pulls the previous item into view, so it pages backward;
/// dragging left pages forward.
#[must_use]
pub fn paging_direction(swipe: SwipeDirection) -> Direction {
    match swipe {
        SwipeDirection::Right => Direction::Backward,
        SwipeDirection::Left => Direction::Forward,
    }
}

/// What a finished touch sequence asks of the pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeIntent {
    /// Raw classification from the recognizer.
    pub result: SwipeResult,
    /// Paging direction, if the touch qualified.
    pub direction: Option<Direction>,
}

impl SwipeIntent {
    /// Returns `true` if the host should suppress the touch's default handling.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        self.result.prevents_default()
    }
}

/// Touch listener state for one pager surface.
#[derive(Clone, Copy, Debug)]
pub struct SwipeBridge {
    recognizer: SwipeRecognizer,
    attached: bool,
}

impl SwipeBridge {
    /// Creates an attached bridge.
    #[must_use]
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            recognizer: SwipeRecognizer::new(thresholds),
            attached: true,
        }
    }

    /// Returns `true` while touch events are being listened to.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Starts listening again after [`SwipeBridge::detach`].
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops listening and forgets any touch in progress.
    pub fn detach(&mut self) {
        self.attached = false;
        self.recognizer.cancel();
    }

    /// Records a touch start.
    pub fn touch_start(&mut self, pos: Point, now: u64) {
        if self.attached {
            self.recognizer.on_start(pos, now);
        }
    }

    /// Classifies a touch end. Returns `None` when detached.
    pub fn touch_end(&mut self, pos: Point, now: u64) -> Option<SwipeIntent> {
        if !self.attached {
            return None;
        }
        let result = self.recognizer.on_end(pos, now);
        Some(SwipeIntent {
            result,
            direction: result.direction().map(paging_direction),
        })
    }

    /// Forgets a touch in progress.
    pub fn touch_cancel(&mut self) {
        self.recognizer.cancel();
    }
}
