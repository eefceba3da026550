// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the solver: sides, overlay modes, and placement results.

use kurbo::{Point, Rect, Size};

/// Requested placement direction relative to the trigger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Side {
    /// Above the trigger, horizontally centered on it.
    Top,
    /// Below the trigger, horizontally centered on it.
    Bottom,
    /// Left of the trigger, vertically centered on it.
    Left,
    /// Right of the trigger, vertically centered on it.
    Right,
    /// Centered in the boundary; the trigger is ignored.
    #[default]
    Center,
}

impl Side {
    /// The side a flip switches to.
    ///
    /// [`Side::Center`] is its own opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }
}

/// Kind of overlay being placed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Mode {
    /// Hover-driven hint anchored to its trigger.
    #[default]
    Tooltip,
    /// Click-driven menu anchored to its trigger.
    Menu,
    /// Dialog placed against the viewport.
    Modal,
}

impl Mode {
    /// How a container in this mode should be positioned by the host.
    pub const fn positioning(self) -> Positioning {
        match self {
            Self::Modal => Positioning::Fixed,
            Self::Tooltip | Self::Menu => Positioning::Absolute,
        }
    }
}

/// CSS-style positioning scheme the host should apply along with the coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Positioning {
    /// Relative to the document; moves with page scroll.
    Absolute,
    /// Relative to the viewport; unaffected by page scroll.
    Fixed,
}

/// Result of [`solve`](crate::solve).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Final top edge of the container.
    pub top: f64,
    /// Final left edge of the container.
    pub left: f64,
    /// Side actually used. Differs from the preferred side only after a flip.
    pub side: Side,
    /// Whether the preferred side overflowed and the opposite side was used.
    pub flipped: bool,
    /// Positioning scheme to apply with `top`/`left`.
    pub positioning: Positioning,
}

impl Placement {
    /// Top-left corner of the placed container.
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Rectangle covered by a container of `size` at this placement.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right, Side::Center] {
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn only_modal_is_fixed() {
        assert_eq!(Mode::Modal.positioning(), Positioning::Fixed);
        assert_eq!(Mode::Menu.positioning(), Positioning::Absolute);
        assert_eq!(Mode::Tooltip.positioning(), Positioning::Absolute);
    }

    #[test]
    fn placement_rect_uses_origin() {
        let p = Placement {
            top: 10.0,
            left: 20.0,
            side: Side::Bottom,
            flipped: false,
            positioning: Positioning::Absolute,
        };
        assert_eq!(p.rect(Size::new(5.0, 6.0)), Rect::new(20.0, 10.0, 25.0, 16.0));
    }
}
