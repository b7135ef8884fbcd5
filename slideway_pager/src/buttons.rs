// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation button state.
//!
//! Visibility follows the position: the backward button disappears at the
//! start and the forward button at the end. Enabled-ness additionally drops
//! while a slide and its settle margin are in progress, so a button can be
//! visible but disabled.

use bitflags::bitflags;

use crate::position::Position;

bitflags! {
    /// State of one navigation button.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ButtonFlags: u8 {
        /// The host should render the button.
        const VISIBLE = 1 << 0;
        /// The host should accept presses on the button.
        const ENABLED = 1 << 1;
    }
}

impl ButtonFlags {
    /// Shorthand for `contains(VISIBLE)`.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.contains(Self::VISIBLE)
    }

    /// Shorthand for `contains(ENABLED)`.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }
}

/// Both navigation buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NavButtons {
    /// The "previous" control.
    pub backward: ButtonFlags,
    /// The "next" control.
    pub forward: ButtonFlags,
}

impl NavButtons {
    /// Derives button state from a position and the animation lock.
    #[must_use]
    pub fn for_position(position: &Position, locked: bool) -> Self {
        let flags = |visible: bool| {
            let mut f = ButtonFlags::empty();
            if visible {
                f |= ButtonFlags::VISIBLE;
                if !locked {
                    f |= ButtonFlags::ENABLED;
                }
            }
            f
        };
        Self {
            backward: flags(!position.at_start()),
            forward: flags(!position.at_end()),
        }
    }

    /// Returns `true` if reflecting `self` into the host would change anything
    /// compared with `previous`.
    #[must_use]
    pub fn changed_since(&self, previous: &Self) -> bool {
        self != previous
    }
}

/// Keeps [`NavButtons`] in step with the position and the slide lock.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonController {
    buttons: NavButtons,
    locked: bool,
}

impl ButtonController {
    /// Creates a controller already evaluated for `position`.
    #[must_use]
    pub fn new(position: &Position) -> Self {
        Self {
            buttons: NavButtons::for_position(position, false),
            locked: false,
        }
    }

    /// Current button state.
    #[must_use]
    pub fn buttons(&self) -> NavButtons {
        self.buttons
    }

    /// Returns `true` while a slide holds the buttons disabled.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Re-evaluates visibility (and enabled-ness under the current lock).
    pub fn update(&mut self, position: &Position) -> NavButtons {
        self.buttons = NavButtons::for_position(position, self.locked);
        self.buttons
    }

    /// Disables both buttons until [`ButtonController::unlock`].
    pub fn lock(&mut self, position: &Position) -> NavButtons {
        self.locked = true;
        self.update(position)
    }

    /// Re-enables whichever buttons are visible.
    pub fn unlock(&mut self, position: &Position) -> NavButtons {
        self.locked = false;
        self.update(position)
    }
}
