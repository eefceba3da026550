// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and whatever draws overlays.
//!
//! The engine never reads live geometry itself. Callers either hand a [`Geometry`] snapshot to
//! [`Coordinator::update_position`](crate::Coordinator::update_position), or implement
//! [`OverlayHost`] and let [`Coordinator::present`](crate::Coordinator::present) run the full
//! measure → solve → apply pass.

use kurbo::Rect;

use crate::types::OverlayId;

/// One consistent snapshot of the rectangles involved in placing an overlay.
///
/// All rectangles share one coordinate space (typically viewport pixels).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Rectangle of the trigger element.
    pub trigger: Rect,
    /// Rectangle of the container as measured; only its size is used.
    pub container: Rect,
    /// Live rectangle of a boundary element, if the overlay has one.
    ///
    /// Takes precedence over the config's fixed [`boundary`](crate::OverlayConfig::boundary).
    pub boundary: Option<Rect>,
    /// The visible viewport.
    pub viewport: Rect,
}

impl Geometry {
    /// Snapshot bounded by the viewport.
    pub fn new(trigger: Rect, container: Rect, viewport: Rect) -> Self {
        Self {
            trigger,
            container,
            boundary: None,
            viewport,
        }
    }

    /// Attach a live boundary rectangle.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Rect) -> Self {
        self.boundary = Some(boundary);
        self
    }
}

/// Presentation layer driven by [`Coordinator::present`](crate::Coordinator::present).
///
/// Calls arrive in a fixed order for each pass:
///
/// 1. [`prepare_measure`](Self::prepare_measure)
/// 2. [`measure`](Self::measure), exactly once
/// 3. [`apply_placement`](Self::apply_placement)
/// 4. [`finish_measure`](Self::finish_measure)
///
/// Coordinates are therefore written while the container is still invisible, and nothing is
/// shown at a stale position.
pub trait OverlayHost {
    /// Make the container measurable without showing it (for example laid out but hidden).
    fn prepare_measure(&mut self, id: &OverlayId);

    /// Read trigger, container, boundary, and viewport rectangles.
    fn measure(&mut self, id: &OverlayId) -> Geometry;

    /// Write the solved coordinates and positioning scheme to the container.
    fn apply_placement(&mut self, id: &OverlayId, placement: &understory_placement::Placement);

    /// Make the container visible again.
    fn finish_measure(&mut self, id: &OverlayId);
}
