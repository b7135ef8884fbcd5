// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The track: the host container whose children are the paged items.
//!
//! The engine never touches a real element tree. Hosts implement [`Track`]
//! over whatever they render into (a DOM node via `web-sys`, a retained widget
//! list, a terminal row), and the engine drives it through these few
//! operations. [`VecTrack`] is an in-memory implementation for tests and
//! headless hosts.

use alloc::vec::Vec;

use slideway_timing::TimingFunction;

/// Which end of the track an inserted item goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Before the first child.
    Start,
    /// After the last child.
    End,
}

/// A native transition request attached to an offset write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransition {
    /// Transition length in milliseconds.
    pub duration_ms: u64,
    /// Easing curve.
    pub timing: TimingFunction,
}

/// Host-side container of paged items.
///
/// Indices refer to the current child order, which the engine rotates as it
/// pages: child `0` is always the first visible item at rest.
pub trait Track {
    /// Returns `false` once the container has been detached from the host.
    ///
    /// Event-time operations check this first and do nothing when it is `false`.
    fn is_connected(&self) -> bool {
        true
    }

    /// Number of children currently in the track.
    fn item_count(&self) -> usize;

    /// Inserts a copy of the child at `index` at `edge`.
    fn clone_item(&mut self, index: usize, edge: Edge);

    /// Removes the child at `index`.
    fn remove_item(&mut self, index: usize);

    /// Sets the horizontal translation of the whole track.
    ///
    /// `None` means apply immediately with transitions disabled; `Some` asks
    /// the host to animate from the current translation.
    fn set_offset(&mut self, offset: f64, transition: Option<SlideTransition>);

    /// Sets the inline width of one child.
    fn set_item_extent(&mut self, index: usize, extent: f64);

    /// Sets the inline width of the track itself.
    fn set_track_extent(&mut self, extent: f64);
}

/// One child of a [`VecTrack`].
#[derive(Clone, Debug, PartialEq)]
pub struct TrackItem<T> {
    /// Host payload.
    pub value: T,
    /// Last width applied by the engine.
    pub extent: f64,
}

/// In-memory [`Track`] that records what the engine did to it.
#[derive(Clone, Debug)]
pub struct VecTrack<T> {
    items: Vec<TrackItem<T>>,
    offset: f64,
    transition: Option<SlideTransition>,
    extent: f64,
    connected: bool,
    clones: usize,
    removals: usize,
    offset_writes: usize,
}

impl<T: Clone> VecTrack<T> {
    /// Creates a connected track holding `values` in order.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: values
                .into_iter()
                .map(|value| TrackItem { value, extent: 0.0 })
                .collect(),
            offset: 0.0,
            transition: None,
            extent: 0.0,
            connected: true,
            clones: 0,
            removals: 0,
            offset_writes: 0,
        }
    }
}

impl<T> VecTrack<T> {
    /// Children in current order.
    #[must_use]
    pub fn items(&self) -> &[TrackItem<T>] {
        &self.items
    }

    /// Payloads in current order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().map(|i| &i.value)
    }

    /// Current translation.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Transition attached to the last offset write.
    #[must_use]
    pub fn transition(&self) -> Option<SlideTransition> {
        self.transition
    }

    /// Current track width.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Number of `clone_item` calls so far.
    #[must_use]
    pub fn clones(&self) -> usize {
        self.clones
    }

    /// Number of `remove_item` calls so far.
    #[must_use]
    pub fn removals(&self) -> usize {
        self.removals
    }

    /// Number of `set_offset` calls so far.
    #[must_use]
    pub fn offset_writes(&self) -> usize {
        self.offset_writes
    }

    /// Simulates the host attaching or detaching the container.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

impl<T: Clone> Track for VecTrack<T> {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn clone_item(&mut self, index: usize, edge: Edge) {
        let Some(item) = self.items.get(index).cloned() else {
            return;
        };
        match edge {
            Edge::Start => self.items.insert(0, item),
            Edge::End => self.items.push(item),
        }
        self.clones += 1;
    }

    fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.removals += 1;
        }
    }

    fn set_offset(&mut self, offset: f64, transition: Option<SlideTransition>) {
        self.offset = offset;
        self.transition = transition;
        self.offset_writes += 1;
    }

    fn set_item_extent(&mut self, index: usize, extent: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.extent = extent;
        }
    }

    fn set_track_extent(&mut self, extent: f64) {
        self.extent = extent;
    }
}
