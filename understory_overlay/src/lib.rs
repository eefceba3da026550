// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlay: deterministic coordination of tooltips, menus, and modals.
//!
//! ## Overview
//!
//! This crate tracks which overlays are open and where they go.
//! It does not create elements, listen to input devices, or draw anything.
//! Widget wiring translates raw input into [`Action`]s, and a host applies the resulting states,
//! [`Effect`]s, and [`Placement`]s.
//!
//! ## Pieces
//!
//! - [`OverlayConfig`]: per-overlay mode, placement preferences, and closing rules.
//!   Doubles as a patch for re-registration.
//! - [`transition`](machine::transition): the pure transition function
//!   `(state, action, config) → next state + effect`. See [`machine`] for the table.
//! - [`ActionBus`]: an ordered queue of `(id, action)` pairs with any number of producers.
//! - [`Coordinator`]: the registry and the bus's single consumer. Applies transitions one at a
//!   time, notifies observers after each committed change, and solves placements.
//! - [`OverlayHost`]: the seam for a flicker-free measure → solve → apply pass.
//!
//! Placement itself lives in [`understory_placement`], re-exported here.
//!
//! ## Workflow
//!
//! 1) [`Coordinator::register`] each overlay.
//! 2) [`Coordinator::subscribe`] an observer that shows/hides the container.
//!    The current state is replayed immediately.
//! 3) Route input: [`Coordinator::dispatch`], or [`ActionBus::send`] + [`Coordinator::drain`].
//!    Each state change reaches every observer once; repeated actions that do not change
//!    state are silent. Actions for unknown ids are dropped.
//! 4) When an overlay opens, call [`Coordinator::update_position`] with a [`Geometry`] snapshot
//!    or [`Coordinator::present`] with an [`OverlayHost`]. Observers registered with
//!    [`Coordinator::subscribe_with`] can do the same from the [`Notice`] they receive.
//! 5) [`Coordinator::unregister`] on teardown. Queued actions for the id are discarded.
//!
//! ## Example
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use kurbo::Rect;
//! use understory_overlay::{Action, Coordinator, Geometry, OverlayConfig, OverlayState};
//!
//! let mut coord = Coordinator::new();
//! coord.register("file-menu", OverlayConfig::menu());
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! coord.subscribe("file-menu", move |state| sink.borrow_mut().push(state)).unwrap();
//!
//! for action in [Action::Open, Action::Open, Action::Close, Action::Toggle] {
//!     coord.dispatch("file-menu", action);
//! }
//! use OverlayState::{Closed, Open};
//! assert_eq!(*seen.borrow(), [Closed, Open, Closed, Open]);
//!
//! let geometry = Geometry::new(
//!     Rect::from_origin_size((50.0, 100.0), (40.0, 20.0)),
//!     Rect::from_origin_size((0.0, 0.0), (100.0, 30.0)),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//! let placement = coord.update_position("file-menu", &geometry).unwrap();
//! assert_eq!((placement.top, placement.left), (128.0, 20.0));
//! ```
//!
//! ## Backdrops and outside clicks
//!
//! [`Action::Outside`] honors [`OverlayConfig::close_on_outside`] in every mode.
//! A modal backdrop click is a separate trigger that hosts wire to [`Action::Close`], so a modal
//! may be closed by either.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bus;
mod config;
mod coordinator;
mod error;
mod host;
pub mod machine;
mod types;

pub use bus::ActionBus;
pub use config::OverlayConfig;
pub use coordinator::{Coordinator, Notice, Subscription};
pub use error::NotFoundError;
pub use host::{Geometry, OverlayHost};
pub use types::{Action, Change, Effect, OverlayId, OverlayState, Transition};
pub use understory_placement;
pub use understory_placement::{Mode, Placement, Positioning, Side};
