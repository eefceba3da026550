// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement solver.
//!
//! ## Algorithm
//!
//! 1. Normalize inputs: rectangles with swapped edges are made positive and negative container
//!    extents are treated as zero.
//! 2. For [`Mode::Modal`], a boundary wider or taller than the viewport is replaced by the viewport.
//! 3. Anchor the container on the preferred side, `offset` away from the trigger and centered on
//!    the perpendicular axis. [`Side::Center`] centers in the boundary instead.
//! 4. For anchored sides outside modal mode, if the container overflows the boundary on the
//!    preferred side's far edge, anchor once on the opposite side. There is no second flip.
//! 5. Clamp into the boundary. When the container is larger than the boundary, it is pinned to the
//!    boundary's left/top edge.

use kurbo::{Point, Rect, Size};

use crate::types::{Mode, Placement, Side};

/// Gap between trigger and container used when none is configured.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Inputs to [`solve`]: one consistent geometry snapshot plus placement preferences.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Request {
    /// Rectangle of the element the overlay is anchored to.
    pub trigger: Rect,
    /// Measured size of the overlay container.
    pub container: Size,
    /// Rectangle the container is clamped into.
    pub boundary: Rect,
    /// Visible viewport. Used by [`Mode::Modal`] when the boundary exceeds it.
    pub viewport: Rect,
    /// Requested side.
    pub preferred: Side,
    /// Gap between trigger and container, away from the trigger.
    pub offset: f64,
    /// Overlay kind.
    pub mode: Mode,
}

impl Request {
    /// Create a request bounded by the viewport, centered, with the default offset.
    pub fn new(trigger: Rect, container: Size, viewport: Rect) -> Self {
        Self {
            trigger,
            container,
            boundary: viewport,
            viewport,
            preferred: Side::Center,
            offset: DEFAULT_OFFSET,
            mode: Mode::Tooltip,
        }
    }

    /// Clamp into `boundary` instead of the viewport.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Rect) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the preferred side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.preferred = side;
        self
    }

    /// Set the gap between trigger and container.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the overlay mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Compute the final position of an overlay container.
///
/// The result is a pure function of `request`: solving the same request twice yields the same
/// placement. See the [module docs](self) for the algorithm.
pub fn solve(request: &Request) -> Placement {
    let trigger = request.trigger.abs();
    let container = Size::new(
        request.container.width.max(0.0),
        request.container.height.max(0.0),
    );
    let viewport = request.viewport.abs();
    let mut boundary = request.boundary.abs();

    if request.mode == Mode::Modal
        && (boundary.width() > viewport.width() || boundary.height() > viewport.height())
    {
        boundary = viewport;
    }

    let mut side = request.preferred;
    let mut origin = anchor(side, trigger, container, boundary, request.offset);
    let mut flipped = false;

    if side != Side::Center
        && request.mode != Mode::Modal
        && overflows(side, origin, container, boundary)
    {
        side = side.opposite();
        origin = anchor(side, trigger, container, boundary, request.offset);
        flipped = true;
        tracing::trace!(preferred = ?request.preferred, used = ?side, "placement flipped");
    }

    let left = clamp_axis(origin.x, boundary.x0, boundary.x1 - container.width);
    let top = clamp_axis(origin.y, boundary.y0, boundary.y1 - container.height);
    if left != origin.x || top != origin.y {
        tracing::trace!(
            from_left = origin.x,
            from_top = origin.y,
            left,
            top,
            "placement clamped into boundary"
        );
    }

    Placement {
        top,
        left,
        side,
        flipped,
        positioning: request.mode.positioning(),
    }
}

/// Top-left corner for a container placed on `side`, before any clamping.
fn anchor(side: Side, trigger: Rect, container: Size, boundary: Rect, offset: f64) -> Point {
    let center_x = trigger.x0 + trigger.width() / 2.0 - container.width / 2.0;
    let center_y = trigger.y0 + trigger.height() / 2.0 - container.height / 2.0;
    match side {
        Side::Top => Point::new(center_x, trigger.y0 - container.height - offset),
        Side::Bottom => Point::new(center_x, trigger.y1 + offset),
        Side::Left => Point::new(trigger.x0 - container.width - offset, center_y),
        Side::Right => Point::new(trigger.x1 + offset, center_y),
        Side::Center => Point::new(
            boundary.x0 + boundary.width() / 2.0 - container.width / 2.0,
            boundary.y0 + boundary.height() / 2.0 - container.height / 2.0,
        ),
    }
}

/// Whether a container at `origin` spills past the boundary edge that `side` points at.
fn overflows(side: Side, origin: Point, container: Size, boundary: Rect) -> bool {
    match side {
        Side::Top => origin.y < boundary.y0,
        Side::Bottom => origin.y + container.height > boundary.y1,
        Side::Left => origin.x < boundary.x0,
        Side::Right => origin.x + container.width > boundary.x1,
        Side::Center => false,
    }
}

// Not `f64::clamp`: `max < min` whenever the container is larger than the boundary,
// and the lower edge must win in that case.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}
