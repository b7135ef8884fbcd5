// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared, debounced viewport-resize dispatch.
//!
//! A host keeps one [`ResizeDispatcher`] per event loop, forwards every
//! window resize into it, and polls it from its timer callback. Mounted pagers
//! subscribe when they connect and unsubscribe when they disconnect, so any
//! number of pagers share a single debounce instead of each carrying its own.
//!
//! ## Minimal example
//!
//! ```rust
//! use slideway_pager::ResizeDispatcher;
//!
//! let mut resize = ResizeDispatcher::new(20);
//! let a = resize.subscribe();
//! let b = resize.subscribe();
//!
//! resize.on_resize(0);
//! resize.on_resize(8);
//! assert!(resize.poll(20).is_none());
//!
//! // One trailing broadcast for the whole burst.
//! assert_eq!(resize.poll(28), Some(vec![a, b]));
//! assert!(resize.poll(60).is_none());
//! ```

use alloc::vec::Vec;

use hashbrown::HashSet;
use slideway_timing::Debounce;

/// Default quiet period before a resize burst is broadcast.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 20;

/// Subscription handle returned by [`ResizeDispatcher::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// One debounce shared by every subscribed pager.
#[derive(Clone, Debug)]
pub struct ResizeDispatcher {
    debounce: Debounce,
    subscribers: HashSet<SubscriberId>,
    next_id: u64,
}

impl Default for ResizeDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

impl ResizeDispatcher {
    /// Creates a dispatcher with the given quiet period.
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            debounce: Debounce::new(debounce_ms),
            subscribers: HashSet::new(),
            next_id: 0,
        }
    }

    /// Adds a subscriber.
    pub fn subscribe(&mut self) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id);
        id
    }

    /// Removes a subscriber. Returns `false` if it was not subscribed.
    ///
    /// The pending debounce is dropped once the last subscriber leaves.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let removed = self.subscribers.remove(&id);
        if self.subscribers.is_empty() {
            self.debounce.cancel();
        }
        removed
    }

    /// Returns `true` if `id` is currently subscribed.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Records a viewport resize at `now`.
    ///
    /// Ignored while nobody is subscribed.
    pub fn on_resize(&mut self, now: u64) {
        if !self.subscribers.is_empty() {
            self.debounce.trigger(now);
        }
    }

    /// When the pending broadcast is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    /// Returns the subscribers to re-measure, once per resize burst.
    ///
    /// Subscribers are listed in subscription order.
    pub fn poll(&mut self, now: u64) -> Option<Vec<SubscriberId>> {
        if !self.debounce.poll(now) {
            return None;
        }
        let mut ids: Vec<_> = self.subscribers.iter().copied().collect();
        ids.sort_unstable();
        log::debug!("resize settled; notifying {} pagers", ids.len());
        Some(ids)
    }
}
