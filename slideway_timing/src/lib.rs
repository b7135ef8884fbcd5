// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideway Timing: host-agnostic timing primitives for UI runtimes.
//!
//! This crate holds the small pieces of time bookkeeping that cooperative,
//! single-threaded UI engines keep re-implementing:
//!
//! - [`TimingFunction`]: easing curves evaluated on a normalized `t` in `[0, 1]`.
//! - [`Debounce`]: a trailing debounce that collapses a burst of triggers into
//!   one firing after a quiet period.
//! - [`TimerQueue`]: an ordered queue of deadlines carrying caller-defined keys.
//!
//! None of these own a clock. Every method takes the current time as a `u64`
//! millisecond timestamp supplied by the host (for example from
//! `performance.now()` or an event loop's monotonic clock), which keeps them
//! deterministic and easy to test.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_timing::{Debounce, TimerQueue};
//!
//! // Collapse a resize storm into one trailing call.
//! let mut resize = Debounce::new(20);
//! resize.trigger(0);
//! resize.trigger(5);
//! resize.trigger(12);
//! assert!(!resize.poll(20));
//! assert!(resize.poll(32));
//! assert!(!resize.poll(40));
//!
//! // Keyed deadlines drained in order.
//! let mut timers = TimerQueue::new();
//! timers.schedule(500, "slide-end");
//! timers.schedule(550, "settle");
//! assert_eq!(timers.next_deadline(), Some(500));
//! assert_eq!(timers.drain_due(600), vec!["slide-end", "settle"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod easing;
mod queue;

pub use debounce::Debounce;
pub use easing::TimingFunction;
pub use queue::{TimerId, TimerQueue};
