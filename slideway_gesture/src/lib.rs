// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideway Gesture: discrete swipe recognition.
//!
//! This crate turns a touch-start/touch-end pair into either a qualifying
//! horizontal swipe or an explicit reason for ignoring it. It is meant for
//! step-wise paging UIs (carousels, sliders, panel drawers) where a swipe is a
//! single command rather than a drag that the content follows.
//!
//! - [`swipe::SwipeRecognizer`]: records the start sample and classifies the end sample.
//! - [`swipe::SwipeThresholds`]: minimum horizontal travel and maximum duration.
//! - [`swipe::SwipeResult`]: the classification, including whether the host should
//!   suppress the platform's default handling for the touch.
//!
//! The recognizer does not know about any event system. Hosts forward pointer
//! positions (as [`kurbo::Point`]) and `u64` millisecond timestamps.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use slideway_gesture::swipe::{SwipeDirection, SwipeRecognizer, SwipeResult};
//!
//! let mut swipe = SwipeRecognizer::default();
//!
//! swipe.on_start(Point::new(200.0, 40.0), 1_000);
//! let result = swipe.on_end(Point::new(170.0, 42.0), 1_050);
//!
//! assert_eq!(result.direction(), Some(SwipeDirection::Left));
//! assert!(result.prevents_default());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod swipe;
