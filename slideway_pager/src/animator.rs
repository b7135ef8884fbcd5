// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide animator: one-step transitions with edge recycling.
//!
//! A forward slide copies the first child to the end, translates the track by
//! one step, and then drops the original first child and snaps the
//! translation back to zero. A backward slide copies the last child to the
//! start, jumps the translation to minus one step, animates back to zero,
//! and then drops the original last child. Either way the child count is back
//! where it started once the slide settles, and the translation is zero at
//! rest.
//!
//! ## Usage
//!
//! 1) Call [`SlideAnimator::play`]; it mutates the track and returns a [`PlayOutcome`].
//! 2) Call [`SlideAnimator::tick`] from the host's frame or timer callback. It
//!    returns the completion once the slide has settled.
//! 3) [`SlideAnimator::next_deadline`] says when the next tick is needed.
//!
//! Only one slide runs at a time; `play` during a slide returns
//! [`PlayOutcome::Busy`] and touches nothing.

use slideway_timing::TimingFunction;

use crate::position::Direction;
use crate::track::{Edge, SlideTransition, Track};

/// How the transform travels from start to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stepping {
    /// One offset write carrying a [`SlideTransition`]; the host animates natively.
    Transition,
    /// The animator writes intermediate offsets itself, in `steps` frames.
    Frames {
        /// Number of frames per slide.
        steps: u32,
    },
}

impl Stepping {
    /// Frame count used by [`Stepping::frames`].
    pub const DEFAULT_FRAMES: u32 = 30;

    /// Manual stepping with the default frame count.
    #[must_use]
    pub const fn frames() -> Self {
        Self::Frames {
            steps: Self::DEFAULT_FRAMES,
        }
    }
}

/// Geometry and timing captured for one slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePlan {
    /// Item width plus gap.
    pub step: f64,
    /// Slide length in milliseconds.
    pub duration_ms: u64,
    /// Items visible at once; used for the degenerate-count check.
    pub visible_count: usize,
    /// Easing curve.
    pub timing: TimingFunction,
}

/// Result of [`SlideAnimator::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The slide started.
    Started,
    /// Another slide is still running.
    Busy,
    /// Too few items to recycle one; nothing was changed.
    Degenerate,
    /// The track is detached.
    Detached,
}

/// Reported by [`SlideAnimator::tick`] when a slide settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCompletion {
    /// Direction of the finished slide.
    pub direction: Direction,
    /// Tick time at which it settled.
    pub finished_at: u64,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    direction: Direction,
    from: f64,
    to: f64,
    step: f64,
    started_at: u64,
    duration_ms: u64,
    timing: TimingFunction,
    frames_applied: u32,
}

/// Single-flight slide driver.
#[derive(Clone, Debug)]
pub struct SlideAnimator {
    stepping: Stepping,
    run: Option<Run>,
    // A slide that lapsed while the track was detached; settled on reattach.
    unsettled: Option<Run>,
}

impl SlideAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub const fn new(stepping: Stepping) -> Self {
        Self {
            stepping,
            run: None,
            unsettled: None,
        }
    }

    /// Active stepping strategy.
    #[must_use]
    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Returns `true` while a slide is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Direction of the slide in flight.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.run.map(|r| r.direction)
    }

    /// Returns `true` if a slide lapsed on a detached track and its recycled
    /// item is still in place.
    #[must_use]
    pub fn needs_repair(&self) -> bool {
        self.unsettled.is_some()
    }

    /// Settles a slide that lapsed while the track was detached.
    ///
    /// Does nothing until the track is connected again. Returns `true` if the
    /// track was repaired.
    pub fn repair<T: Track + ?Sized>(&mut self, track: &mut T) -> bool {
        if !track.is_connected() {
            return false;
        }
        let Some(run) = self.unsettled.take() else {
            return false;
        };
        log::debug!("settling {:?} slide that lapsed while detached", run.direction);
        settle(track, run);
        true
    }

    /// Starts a slide.
    pub fn play<T: Track + ?Sized>(
        &mut self,
        track: &mut T,
        direction: Direction,
        plan: SlidePlan,
        now: u64,
    ) -> PlayOutcome {
        if self.run.is_some() {
            return PlayOutcome::Busy;
        }
        if !track.is_connected() {
            return PlayOutcome::Detached;
        }
        self.repair(track);
        let count = track.item_count();
        if count < plan.visible_count + 1 {
            log::debug!(
                "slide skipped: {count} items cannot recycle with {} visible",
                plan.visible_count
            );
            return PlayOutcome::Degenerate;
        }

        let step = plan.step;
        let (from, to) = match direction {
            Direction::Forward => {
                track.clone_item(0, Edge::End);
                (0.0, -step)
            }
            Direction::Backward => {
                track.clone_item(count - 1, Edge::Start);
                // Hold the current view while the copy sits in front of it.
                track.set_offset(-step, None);
                (-step, 0.0)
            }
        };
        track.set_track_extent((count + 1) as f64 * step);

        if self.stepping == Stepping::Transition {
            track.set_offset(
                to,
                Some(SlideTransition {
                    duration_ms: plan.duration_ms,
                    timing: plan.timing,
                }),
            );
        }

        self.run = Some(Run {
            direction,
            from,
            to,
            step,
            started_at: now,
            duration_ms: plan.duration_ms,
            timing: plan.timing,
            frames_applied: 0,
        });
        PlayOutcome::Started
    }

    /// When the next tick should happen, if a slide is running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let run = self.run?;
        let end = run.started_at.saturating_add(run.duration_ms);
        match self.stepping {
            Stepping::Frames { steps } if steps > 0 && run.frames_applied < steps => {
                let next = u128::from(run.frames_applied) + 1;
                let at = (next * u128::from(run.duration_ms)).div_ceil(u128::from(steps));
                let at = u64::try_from(at).unwrap_or(u64::MAX);
                Some(run.started_at.saturating_add(at).min(end))
            }
            _ => Some(end),
        }
    }

    /// Advances the slide to `now`, settling it once its duration has elapsed.
    pub fn tick<T: Track + ?Sized>(&mut self, track: &mut T, now: u64) -> Option<SlideCompletion> {
        self.repair(track);
        let mut run = self.run?;
        let elapsed = now.saturating_sub(run.started_at);

        if !track.is_connected() {
            // Nothing left to draw into; let the slide lapse on schedule.
            if elapsed >= run.duration_ms {
                self.run = None;
                self.unsettled = Some(run);
                return Some(SlideCompletion {
                    direction: run.direction,
                    finished_at: now,
                });
            }
            return None;
        }

        if let Stepping::Frames { steps } = self.stepping {
            let steps = steps.max(1);
            let due = if run.duration_ms == 0 {
                steps
            } else {
                let frames =
                    u128::from(elapsed) * u128::from(steps) / u128::from(run.duration_ms);
                u32::try_from(frames).unwrap_or(steps).min(steps)
            };
            if due > run.frames_applied {
                let t = f64::from(due) / f64::from(steps);
                let offset = run.timing.lerp(run.from, run.to, t);
                log::trace!("slide frame {due}/{steps} at {offset}");
                track.set_offset(offset, None);
                run.frames_applied = due;
            }
        }

        if elapsed < run.duration_ms {
            self.run = Some(run);
            return None;
        }

        self.run = None;
        settle(track, run);
        Some(SlideCompletion {
            direction: run.direction,
            finished_at: now,
        })
    }
}

fn settle<T: Track + ?Sized>(track: &mut T, run: Run) {
    match run.direction {
        Direction::Forward => track.remove_item(0),
        Direction::Backward => {
            let count = track.item_count();
            if count > 0 {
                track.remove_item(count - 1);
            }
        }
    }
    track.set_offset(0.0, None);
    track.set_track_extent(track.item_count() as f64 * run.step);
}
