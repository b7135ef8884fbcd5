// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport metrics: how many items fit and how wide each one is.

use crate::config::{Breakpoints, PeekPolicy};

/// Derived sizing for one container width.
///
/// Always recomputed from scratch with [`compute_metrics`]; never patched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    /// Items shown at once. Never zero.
    pub visible_count: usize,
    /// Width of each item in pixels. Positive whenever the container is.
    pub item_extent: f64,
}

impl ViewportMetrics {
    /// Distance between the leading edges of neighboring items.
    #[must_use]
    pub fn step(&self, gap: f64) -> f64 {
        self.item_extent + gap
    }

    /// Largest legal window offset for `item_count` items.
    #[must_use]
    pub fn max_offset(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.visible_count)
    }

    /// Returns `true` if there are too few items to recycle one during a slide.
    #[must_use]
    pub fn is_degenerate(&self, item_count: usize) -> bool {
        item_count < self.visible_count + 1
    }
}

/// Computes visible count and item width for a container.
///
/// The visible count comes from `breakpoints` (largest threshold first, one
/// item when nothing matches). Items then split the container evenly after
/// subtracting the gaps between them. When only one item is visible and there
/// is a neighbor to show, the item shrinks by the peek factor so the next
/// item's edge stays in view.
///
/// If the gaps would consume the whole container, they are ignored so the
/// item width stays positive. A zero-width or non-finite container yields a
/// zero item width.
#[must_use]
pub fn compute_metrics(
    container_width: f64,
    breakpoints: &Breakpoints,
    item_count: usize,
    gap: f64,
    peek: PeekPolicy,
) -> ViewportMetrics {
    let width = if container_width.is_finite() {
        container_width.max(0.0)
    } else {
        0.0
    };
    let visible_count = breakpoints.visible_for(width);
    if width == 0.0 {
        return ViewportMetrics {
            visible_count,
            item_extent: 0.0,
        };
    }

    let visible = visible_count as f64;
    let share = width / visible;
    let extent = if visible_count == 1 {
        if peek.peeks() && item_count > 1 {
            (width - gap) * peek.single_item_factor
        } else {
            width
        }
    } else {
        (width - gap * (visible - 1.0)) / visible
    };

    ViewportMetrics {
        visible_count,
        item_extent: if extent > 0.0 { extent } else { share },
    }
}
