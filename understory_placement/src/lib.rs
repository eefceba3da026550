// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Placement: a Kurbo-native solver for anchored overlays.
//!
//! Given the rectangle of a trigger, the size of an overlay container, a boundary, and a preferred
//! side, [`solve`] computes where the container's top-left corner should go.
//!
//! - Places the container adjacent to the trigger on the preferred side, centered on the perpendicular axis.
//! - Flips to the opposite side at most once when the preferred side overflows the boundary.
//! - Clamps the result into the boundary, so the container never renders fully outside it.
//!
//! The solver is a pure function of its inputs.
//! It never reads live geometry, never touches presentation APIs, and never fails: malformed
//! rectangles (inverted, zero area) are normalized and clamped to a best-effort position.
//!
//! ## Coordinates
//!
//! All rectangles use Kurbo's y-down convention: `x0`/`y0` are the left/top edges and `x1`/`y1`
//! the right/bottom edges, in the same space (for example, viewport pixels).
//!
//! ## Modes
//!
//! [`Mode::Modal`] differs from the anchored modes in three ways:
//! - A boundary larger than the viewport collapses to the viewport.
//! - No flip is attempted.
//! - The result asks for [`Positioning::Fixed`] instead of [`Positioning::Absolute`].
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{Request, Side, solve};
//!
//! let trigger = Rect::from_origin_size((50.0, 100.0), (40.0, 20.0));
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! let placement = solve(
//!     &Request::new(trigger, Size::new(100.0, 30.0), viewport).with_side(Side::Bottom),
//! );
//! assert_eq!((placement.top, placement.left), (128.0, 20.0));
//! assert!(!placement.flipped);
//!
//! // A boundary too short for the bottom side flips the container above the trigger.
//! let short = Rect::new(0.0, 0.0, 800.0, 140.0);
//! let placement = solve(
//!     &Request::new(trigger, Size::new(100.0, 30.0), viewport)
//!         .with_boundary(short)
//!         .with_side(Side::Bottom),
//! );
//! assert_eq!((placement.top, placement.left), (62.0, 20.0));
//! assert_eq!(placement.side, Side::Top);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod solve;
mod types;

pub use solve::{DEFAULT_OFFSET, Request, solve};
pub use types::{Mode, Placement, Positioning, Side};
