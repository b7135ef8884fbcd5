// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup-time errors.
//!
//! Only mounting can fail. Once a [`Pager`](crate::Pager) exists, every
//! interaction reports its result through an outcome enum instead.

use core::fmt;

/// A [`PagerConfig`](crate::PagerConfig) value that cannot produce a usable layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A breakpoint asks for zero visible items.
    ZeroVisible {
        /// Threshold of the offending breakpoint.
        min_width: f64,
    },
    /// A breakpoint threshold is negative or not finite.
    InvalidBreakpointWidth(f64),
    /// The inter-item gap is negative or not finite.
    InvalidGap(f64),
    /// The single-item peek factor is outside `(0, 1]`.
    InvalidPeekFactor(f64),
    /// Frame stepping was configured with zero frames.
    ZeroFrames,
    /// The minimum swipe distance is not a positive, finite length.
    InvalidSwipeDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVisible { min_width } => {
                write!(f, "breakpoint at {min_width}px shows zero items")
            }
            Self::InvalidBreakpointWidth(w) => write!(f, "invalid breakpoint width {w}"),
            Self::InvalidGap(g) => write!(f, "invalid item gap {g}"),
            Self::InvalidPeekFactor(p) => {
                write!(f, "peek factor {p} is outside the range (0, 1]")
            }
            Self::ZeroFrames => f.write_str("frame stepping needs at least one frame"),
            Self::InvalidSwipeDistance(d) => write!(f, "invalid minimum swipe distance {d}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by [`Pager::mount`](crate::Pager::mount).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetupError {
    /// No track element was supplied, or it is not attached.
    MissingTrack,
    /// The configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack => f.write_str("pager mounted without a connected track"),
            Self::Config(err) => write!(f, "invalid pager configuration: {err}"),
        }
    }
}

impl core::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::MissingTrack => None,
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
