// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideway Pager: a headless paging engine for carousels and sliders.
//!
//! A pager shows a responsive window of `N` items from a small, fixed
//! sequence and steps that window forward or backward one item at a time.
//! This crate holds the engine shared by every such component (card
//! carousels, date sliders, drawer panels); hosts only supply a
//! [`PagerConfig`] and a [`Track`] over their rendered items.
//!
//! The pieces, leaves first:
//!
//! - [`compute_metrics`]: visible count and item width for a container width.
//! - [`Position`]: the clamped index of the first visible item.
//! - [`SlideAnimator`]: a single-flight slide that recycles an edge item so the
//!   strip appears continuous. It runs either as one native transition or as
//!   manually stepped frames ([`Stepping`]).
//! - [`SwipeBridge`]: maps qualifying horizontal swipes onto paging directions.
//! - [`ButtonController`]: visibility and enabled state of the two controls.
//! - [`ResizeDispatcher`]: one debounced resize signal shared by all pagers.
//! - [`Pager`]: composes the above and is what hosts talk to.
//!
//! The engine is single-threaded and owns no clock. Every entry point takes
//! the current time in milliseconds, and [`Pager::next_deadline`] tells the
//! host when to call [`Pager::tick`] again.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_pager::{Pager, PagerConfig, RequestOutcome, VecTrack};
//!
//! let cards = VecTrack::new(["a", "b", "c", "d", "e"]);
//! let mut pager = Pager::mount(PagerConfig::card_carousel(), Some(cards), 800.0).unwrap();
//!
//! // 800px shows two cards, so five cards give offsets 0..=3.
//! assert_eq!(pager.metrics().visible_count, 2);
//! assert!(!pager.buttons().backward.is_visible());
//!
//! assert_eq!(pager.forward(0), RequestOutcome::Started);
//! // A second press during the slide is dropped.
//! assert_eq!(pager.forward(10), RequestOutcome::Busy);
//!
//! // Drive the host's frame loop until the slide and its settle margin finish.
//! while let Some(now) = pager.next_deadline() {
//!     pager.tick(now);
//! }
//!
//! assert_eq!(pager.position().offset(), 1);
//! assert!(pager.buttons().backward.is_enabled());
//! let first: Vec<_> = pager.track().values().take(2).copied().collect();
//! assert_eq!(first, ["b", "c"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod buttons;
mod config;
mod error;
mod gesture;
mod metrics;
mod pager;
mod position;
mod resize;
mod track;

pub use animator::{PlayOutcome, SlideAnimator, SlideCompletion, SlidePlan, Stepping};
pub use buttons::{ButtonController, ButtonFlags, NavButtons};
pub use config::{Breakpoint, Breakpoints, PagerConfig, PeekPolicy};
pub use error::{ConfigError, SetupError};
pub use gesture::{SwipeBridge, SwipeIntent, paging_direction};
pub use metrics::{ViewportMetrics, compute_metrics};
pub use pager::{Pager, RESIZE_ATTRIBUTE, RelayoutOutcome, RequestOutcome, TouchOutcome};
pub use position::{Direction, Position};
pub use resize::{DEFAULT_RESIZE_DEBOUNCE_MS, ResizeDispatcher, SubscriberId};
pub use track::{Edge, SlideTransition, Track, TrackItem, VecTrack};

pub use slideway_gesture::swipe::{SwipeResult, SwipeThresholds};
pub use slideway_timing::TimingFunction;
