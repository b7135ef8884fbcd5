// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window position: the index of the first visible item.

/// Paging direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Reveal the next item (window moves toward the end).
    Forward,
    /// Reveal the previous item (window moves toward the start).
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Clamped window offset in `0..=max_offset`.
///
/// Every mutation keeps the offset in range. Out-of-range requests are
/// rejected as no-ops rather than reported as errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    offset: usize,
    max_offset: usize,
}

impl Position {
    /// Creates a tracker at offset zero.
    #[must_use]
    pub const fn new(max_offset: usize) -> Self {
        Self {
            offset: 0,
            max_offset,
        }
    }

    /// Index of the first visible item.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Largest legal offset.
    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Returns `true` if a step in `direction` stays in range.
    #[must_use]
    pub fn can_advance(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.offset < self.max_offset,
            Direction::Backward => self.offset > 0,
        }
    }

    /// Steps one item in `direction`. Returns `false` (and changes nothing) at a boundary.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if !self.can_advance(direction) {
            return false;
        }
        match direction {
            Direction::Forward => self.offset += 1,
            Direction::Backward => self.offset -= 1,
        }
        true
    }

    /// Installs a new upper bound and pulls the offset down into it.
    ///
    /// Returns how many steps the offset moved back.
    pub fn reclamp(&mut self, max_offset: usize) -> usize {
        self.max_offset = max_offset;
        let clamped = self.offset.min(max_offset);
        let moved = self.offset - clamped;
        self.offset = clamped;
        moved
    }

    /// Returns `true` at offset zero.
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.offset == 0
    }

    /// Returns `true` at the largest offset.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.offset == self.max_offset
    }
}
