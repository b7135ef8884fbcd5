// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging engine.
//!
//! [`Pager`] owns a host [`Track`] and composes the other pieces of this
//! crate: metrics from the container width, a clamped [`Position`], the
//! [`SlideAnimator`], the [`ButtonController`] and the [`SwipeBridge`]. Hosts
//! forward their events (button presses, touches, resizes, attribute changes,
//! frame/timer callbacks) and reflect [`Pager::buttons`] into their controls.
//!
//! Button presses and swipes both go through [`Pager::request`], which drops
//! any request that arrives while a slide or its settle margin is in progress.

use kurbo::Point;
use slideway_timing::TimerQueue;

use crate::animator::{PlayOutcome, SlideAnimator, SlideCompletion, SlidePlan};
use crate::buttons::{ButtonController, NavButtons};
use crate::config::PagerConfig;
use crate::error::SetupError;
use crate::gesture::{SwipeBridge, SwipeIntent};
use crate::metrics::{ViewportMetrics, compute_metrics};
use crate::position::{Direction, Position};
use crate::resize::{ResizeDispatcher, SubscriberId};
use crate::track::{Edge, Track};

/// Host attribute that asks for a sizing pass when toggled.
pub const RESIZE_ATTRIBUTE: &str = "resize";

/// Result of a paging request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The slide started and the position moved.
    Started,
    /// A slide or its settle margin is still in progress; the request was dropped.
    Busy,
    /// The window is already at the edge in that direction.
    AtBoundary,
    /// Too few items to page; checked before the boundary.
    Degenerate,
    /// The track is detached.
    Detached,
}

/// Result of a sizing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayoutOutcome {
    /// Sizes were re-applied; `clamped` is how many steps the position moved back.
    Applied {
        /// Steps removed by the reclamp.
        clamped: usize,
    },
    /// A slide is running; the pass will run when it settles.
    Deferred,
    /// The track is detached.
    Detached,
}

/// Everything a touch end produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchOutcome {
    /// The swipe classification and paging direction.
    pub intent: SwipeIntent,
    /// What the resulting request did, if the touch was a swipe.
    pub request: Option<RequestOutcome>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagerTimer {
    Settle,
}

/// A mounted paging engine over a host track.
#[derive(Debug)]
pub struct Pager<T> {
    config: PagerConfig,
    track: T,
    container_width: f64,
    metrics: ViewportMetrics,
    position: Position,
    animator: SlideAnimator,
    buttons: ButtonController,
    swipe: SwipeBridge,
    timers: TimerQueue<PagerTimer>,
    pending_width: Option<f64>,
    subscription: Option<SubscriberId>,
    degenerate: bool,
}

impl<T: Track> Pager<T> {
    /// Mounts a pager on `track`, sized for `container_width`.
    ///
    /// Fails when the configuration is invalid or the track is missing or
    /// detached. Positions start at zero.
    pub fn mount(
        config: PagerConfig,
        track: Option<T>,
        container_width: f64,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let track = track
            .filter(|t| t.is_connected())
            .ok_or(SetupError::MissingTrack)?;

        let metrics = compute_metrics(
            container_width,
            &config.breakpoints,
            track.item_count(),
            config.gap,
            config.peek,
        );
        let position = Position::new(metrics.max_offset(track.item_count()));
        let mut pager = Self {
            animator: SlideAnimator::new(config.stepping),
            buttons: ButtonController::new(&position),
            swipe: SwipeBridge::new(config.swipe),
            config,
            track,
            container_width,
            metrics,
            position,
            timers: TimerQueue::new(),
            pending_width: None,
            subscription: None,
            degenerate: false,
        };
        pager.apply_sizes();
        pager.note_degenerate();
        Ok(pager)
    }

    /// Subscribes to `dispatcher` and starts listening for touches.
    pub fn connect(&mut self, dispatcher: &mut ResizeDispatcher) -> SubscriberId {
        if let Some(id) = self.subscription
            && dispatcher.is_subscribed(id)
        {
            return id;
        }
        let id = dispatcher.subscribe();
        self.subscription = Some(id);
        self.swipe.attach();
        id
    }

    /// Unsubscribes from `dispatcher` and stops listening for touches.
    ///
    /// A slide in flight still settles on later ticks.
    pub fn disconnect(&mut self, dispatcher: &mut ResizeDispatcher) {
        if let Some(id) = self.subscription.take() {
            dispatcher.unsubscribe(id);
        }
        self.swipe.detach();
    }

    /// The resize subscription held since [`Pager::connect`].
    #[must_use]
    pub fn subscription(&self) -> Option<SubscriberId> {
        self.subscription
    }

    /// Pages forward (host "next" button).
    pub fn forward(&mut self, now: u64) -> RequestOutcome {
        self.request(Direction::Forward, now)
    }

    /// Pages backward (host "previous" button).
    pub fn backward(&mut self, now: u64) -> RequestOutcome {
        self.request(Direction::Backward, now)
    }

    /// Pages one item in `direction` if nothing is in progress.
    pub fn request(&mut self, direction: Direction, now: u64) -> RequestOutcome {
        if !self.track.is_connected() {
            return RequestOutcome::Detached;
        }
        if self.is_busy() {
            log::debug!("dropping {direction:?} request: slide in progress");
            return RequestOutcome::Busy;
        }
        if self.degenerate {
            return RequestOutcome::Degenerate;
        }
        if !self.position.can_advance(direction) {
            return RequestOutcome::AtBoundary;
        }

        let plan = SlidePlan {
            step: self.metrics.step(self.config.gap),
            duration_ms: self.config.duration_ms,
            visible_count: self.metrics.visible_count,
            timing: self.config.timing,
        };
        match self.animator.play(&mut self.track, direction, plan, now) {
            PlayOutcome::Started => {
                self.position.advance(direction);
                self.buttons.lock(&self.position);
                let settle_at = now
                    .saturating_add(self.config.duration_ms)
                    .saturating_add(self.config.settle_ms);
                self.timers.schedule(settle_at, PagerTimer::Settle);
                RequestOutcome::Started
            }
            PlayOutcome::Busy => RequestOutcome::Busy,
            PlayOutcome::Degenerate => RequestOutcome::Degenerate,
            PlayOutcome::Detached => RequestOutcome::Detached,
        }
    }

    /// Drives the slide and timers to `now`.
    ///
    /// Returns the completion if a slide settled on this tick. A relayout
    /// deferred during the slide runs right after it settles, or once the
    /// track is connected again.
    pub fn tick(&mut self, now: u64) -> Option<SlideCompletion> {
        let completion = self.animator.tick(&mut self.track, now);
        if !self.animator.is_running()
            && self.track.is_connected()
            && let Some(width) = self.pending_width.take()
        {
            self.relayout(width);
        }
        for timer in self.timers.drain_due(now) {
            match timer {
                PagerTimer::Settle => {
                    self.buttons.unlock(&self.position);
                }
            }
        }
        completion
    }

    /// When the host should call [`Pager::tick`] next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.animator.next_deadline(), self.timers.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Re-measures for a new container width without animating.
    ///
    /// Recomputes metrics, pulls the position back into range (rotating the
    /// track to match), re-applies item and track widths, and refreshes the
    /// buttons. While a slide runs the pass is deferred until it settles.
    pub fn relayout(&mut self, container_width: f64) -> RelayoutOutcome {
        if !self.track.is_connected() {
            return RelayoutOutcome::Detached;
        }
        self.animator.repair(&mut self.track);
        if self.animator.is_running() {
            log::debug!("deferring relayout to {container_width}px until slide settles");
            self.pending_width = Some(container_width);
            return RelayoutOutcome::Deferred;
        }

        self.container_width = container_width;
        let count = self.track.item_count();
        self.metrics = compute_metrics(
            container_width,
            &self.config.breakpoints,
            count,
            self.config.gap,
            self.config.peek,
        );
        let clamped = self.position.reclamp(self.metrics.max_offset(count));
        for _ in 0..clamped {
            rotate_back(&mut self.track);
        }
        self.apply_sizes();
        self.buttons.update(&self.position);
        self.note_degenerate();
        RelayoutOutcome::Applied { clamped }
    }

    /// Host attribute hook: runs a sizing pass when `name` is [`RESIZE_ATTRIBUTE`].
    pub fn attribute_changed(
        &mut self,
        name: &str,
        container_width: f64,
    ) -> Option<RelayoutOutcome> {
        (name == RESIZE_ATTRIBUTE).then(|| self.relayout(container_width))
    }

    /// Forwards a touch start on the pager surface.
    pub fn on_touch_start(&mut self, pos: Point, now: u64) {
        self.swipe.touch_start(pos, now);
    }

    /// Forwards a touch end; a qualifying swipe is routed through [`Pager::request`].
    ///
    /// Returns `None` while disconnected.
    pub fn on_touch_end(&mut self, pos: Point, now: u64) -> Option<TouchOutcome> {
        let intent = self.swipe.touch_end(pos, now)?;
        let request = intent.direction.map(|dir| self.request(dir, now));
        Some(TouchOutcome { intent, request })
    }

    /// Forwards a touch cancel.
    pub fn on_touch_cancel(&mut self) {
        self.swipe.touch_cancel();
    }

    /// Returns `true` while a slide or its settle margin is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.animator.is_running() || self.buttons.is_locked()
    }

    /// Returns `true` while a slide is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Returns `true` if there are too few items to page.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Current window position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current metrics.
    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    /// Current button state for the host to reflect.
    #[must_use]
    pub fn buttons(&self) -> NavButtons {
        self.buttons.buttons()
    }

    /// Container width of the last applied sizing pass.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// The configuration this pager was mounted with.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The host track.
    #[must_use]
    pub fn track(&self) -> &T {
        &self.track
    }

    /// The host track, mutably.
    ///
    /// Changing the child count through this handle is not supported.
    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    /// Tears the pager down and returns the track.
    pub fn into_track(self) -> T {
        self.track
    }

    fn apply_sizes(&mut self) {
        let count = self.track.item_count();
        let extent = self.metrics.item_extent;
        for index in 0..count {
            self.track.set_item_extent(index, extent);
        }
        self.track
            .set_track_extent(count as f64 * self.metrics.step(self.config.gap));
        self.track.set_offset(0.0, None);
    }

    fn note_degenerate(&mut self) {
        let degenerate = self.metrics.is_degenerate(self.track.item_count());
        if degenerate && !self.degenerate {
            log::warn!(
                "pager has {} items but shows {} at once; paging is disabled",
                self.track.item_count(),
                self.metrics.visible_count
            );
        }
        self.degenerate = degenerate;
    }
}

/// Moves the last child to the front without animating.
fn rotate_back<T: Track + ?Sized>(track: &mut T) {
    let count = track.item_count();
    if count >= 2 {
        track.clone_item(count - 1, Edge::Start);
        track.remove_item(count);
    }
}
