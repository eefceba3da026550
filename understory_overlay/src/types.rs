// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: overlay identifiers, states, actions, and the records a dispatch produces.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Unique key of a registered overlay.
///
/// Cheap to compare and hash; borrows as `&str` so registry lookups do not allocate.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OverlayId(String);

impl OverlayId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OverlayId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for OverlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for OverlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OverlayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an overlay is shown.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OverlayState {
    /// Hidden. Every overlay starts here.
    #[default]
    Closed,
    /// Shown and positioned.
    Open,
}

impl OverlayState {
    /// Returns true for [`OverlayState::Open`].
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Named input fed to the state machine.
///
/// Widget wiring translates raw input (clicks, pointer enter/leave, scroll, Escape, outside clicks)
/// into these; the translation itself lives outside this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Action {
    /// Show the overlay.
    Open,
    /// Hide the overlay.
    Close,
    /// Show if hidden, hide if shown.
    Toggle,
    /// A click landed outside both trigger and container.
    Outside,
    /// The Escape key was pressed.
    Esc,
    /// The page or a scroll container scrolled.
    Scroll,
    /// Pointer entered the trigger.
    HoverIn,
    /// Pointer left the trigger and container.
    HoverOut,
}

/// Side effect requested by a transition, for the host to carry out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Effect {
    /// Stop the page behind a modal from scrolling.
    SuspendScroll,
    /// Let the page scroll again.
    RestoreScroll,
}

/// Outcome of [`transition`](crate::machine::transition) when the state changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    /// State to commit.
    pub next: OverlayState,
    /// Side effect to perform once the state is committed.
    pub effect: Option<Effect>,
}

/// A committed state change, as reported by
/// [`Coordinator::drain`](crate::Coordinator::drain).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change {
    /// Overlay whose state changed.
    pub id: OverlayId,
    /// Action that caused the change.
    pub action: Action,
    /// State before the change.
    pub from: OverlayState,
    /// State after the change.
    pub to: OverlayState,
    /// Side effect requested by the change.
    pub effect: Option<Effect>,
}
