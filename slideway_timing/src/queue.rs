// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered deadline queue.
//!
//! [`TimerQueue`] stores `(deadline, key)` pairs and hands keys back in deadline
//! order once the host reports that time has passed. Ties are resolved in
//! scheduling order. It is sized for a handful of pending timers per
//! component, so it keeps a sorted `Vec` rather than a heap.

use alloc::vec::Vec;

/// Handle to a scheduled timer, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<K> {
    due: u64,
    id: TimerId,
    key: K,
}

/// Deadline queue keyed by caller-defined values.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `key` to become due at `due`.
    pub fn schedule(&mut self, due: u64, key: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Insert after every entry with the same or earlier deadline to keep ties FIFO.
        let at = self.entries.partition_point(|e| e.due <= due);
        self.entries.insert(at, Entry { due, id, key });
        id
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(at) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(at);
            true
        } else {
            false
        }
    }

    /// Cancels every timer whose key matches `pred`, returning how many were removed.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&K) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !pred(&e.key));
        before - self.entries.len()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.due)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns every key due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: u64) -> Vec<K> {
        let split = self.entries.partition_point(|e| e.due <= now);
        self.entries.drain(..split).map(|e| e.key).collect()
    }

    /// Drops all pending timers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
