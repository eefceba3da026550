// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-overlay configuration.
//!
//! ## Partial configs
//!
//! Every field of [`OverlayConfig`] is optional, so the same type serves as a full config and as a
//! patch. [`Coordinator::register`](crate::Coordinator::register) on an existing id calls
//! [`OverlayConfig::merge`]: fields set in the patch replace the stored ones, unset fields are kept.
//!
//! Readers go through the resolving accessors, which apply the defaults:
//!
//! | Field | Unset means |
//! |---|---|
//! | `mode` | [`Mode::Tooltip`] |
//! | `preferred` | [`Side::Center`] |
//! | `offset` | [`DEFAULT_OFFSET`] |
//! | `close_on_outside` | on (only an explicit `false` disables it) |
//! | `close_on_esc` | off |
//! | `close_on_scroll` | off |
//! | `disable_background_scroll` | off |
//! | `boundary` | the viewport |
//!
//! ## Presets
//!
//! [`OverlayConfig::tooltip`], [`OverlayConfig::menu`], and [`OverlayConfig::modal`] carry the
//! usual defaults for each kind of overlay and can be refined with the `with_*` builders.

use kurbo::Rect;
use understory_placement::{DEFAULT_OFFSET, Mode, Side};

/// Behavior of one overlay: its kind, placement preferences, and closing rules.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OverlayConfig {
    /// Kind of overlay.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mode: Option<Mode>,
    /// Side to place the container on, relative to the trigger.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub preferred: Option<Side>,
    /// Gap between trigger and container.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub offset: Option<f64>,
    /// Close on [`Action::Outside`](crate::Action::Outside).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub close_on_outside: Option<bool>,
    /// Close on [`Action::Esc`](crate::Action::Esc).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub close_on_esc: Option<bool>,
    /// Close on [`Action::Scroll`](crate::Action::Scroll).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub close_on_scroll: Option<bool>,
    /// Suspend page scrolling while open. Only honored for [`Mode::Modal`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub disable_background_scroll: Option<bool>,
    /// Whether the host should draw a backdrop behind a modal.
    ///
    /// The engine does not read this; hosts wire a backdrop click to
    /// [`Action::Close`](crate::Action::Close).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub backdrop: Option<bool>,
    /// Fixed rectangle to keep the container within. Unset means the viewport.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub boundary: Option<Rect>,
}

impl OverlayConfig {
    /// Tooltip defaults: centered unless a side is chosen, closes on outside clicks.
    pub fn tooltip() -> Self {
        Self {
            mode: Some(Mode::Tooltip),
            ..Self::default()
        }
    }

    /// Menu defaults: below the trigger, closes on outside clicks only.
    pub fn menu() -> Self {
        Self {
            mode: Some(Mode::Menu),
            preferred: Some(Side::Bottom),
            offset: Some(DEFAULT_OFFSET),
            close_on_outside: Some(true),
            close_on_esc: Some(false),
            close_on_scroll: Some(false),
            ..Self::default()
        }
    }

    /// Modal defaults: centered, backdrop, closes on outside clicks and Escape,
    /// suspends background scroll.
    pub fn modal() -> Self {
        Self {
            mode: Some(Mode::Modal),
            preferred: Some(Side::Center),
            close_on_outside: Some(true),
            close_on_esc: Some(true),
            disable_background_scroll: Some(true),
            backdrop: Some(true),
            ..Self::default()
        }
    }

    /// Set the preferred side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.preferred = Some(side);
        self
    }

    /// Set the trigger/container gap.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set whether outside clicks close the overlay.
    #[must_use]
    pub fn with_close_on_outside(mut self, on: bool) -> Self {
        self.close_on_outside = Some(on);
        self
    }

    /// Set whether Escape closes the overlay.
    #[must_use]
    pub fn with_close_on_esc(mut self, on: bool) -> Self {
        self.close_on_esc = Some(on);
        self
    }

    /// Set whether scrolling closes the overlay.
    #[must_use]
    pub fn with_close_on_scroll(mut self, on: bool) -> Self {
        self.close_on_scroll = Some(on);
        self
    }

    /// Set whether an open modal suspends background scroll.
    #[must_use]
    pub fn with_disable_background_scroll(mut self, on: bool) -> Self {
        self.disable_background_scroll = Some(on);
        self
    }

    /// Clamp into a fixed rectangle instead of the viewport.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Rect) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Overlay fields set in `patch` onto `self`. Unset fields in `patch` leave `self` alone.
    pub fn merge(&mut self, patch: Self) {
        let Self {
            mode,
            preferred,
            offset,
            close_on_outside,
            close_on_esc,
            close_on_scroll,
            disable_background_scroll,
            backdrop,
            boundary,
        } = patch;
        self.mode = mode.or(self.mode);
        self.preferred = preferred.or(self.preferred);
        self.offset = offset.or(self.offset);
        self.close_on_outside = close_on_outside.or(self.close_on_outside);
        self.close_on_esc = close_on_esc.or(self.close_on_esc);
        self.close_on_scroll = close_on_scroll.or(self.close_on_scroll);
        self.disable_background_scroll = disable_background_scroll.or(self.disable_background_scroll);
        self.backdrop = backdrop.or(self.backdrop);
        self.boundary = boundary.or(self.boundary);
    }

    /// Resolved mode.
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// Resolved preferred side.
    pub fn side(&self) -> Side {
        self.preferred.unwrap_or_default()
    }

    /// Resolved offset.
    pub fn offset(&self) -> f64 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    /// Whether [`Action::Outside`](crate::Action::Outside) closes the overlay.
    pub fn closes_on_outside(&self) -> bool {
        self.close_on_outside != Some(false)
    }

    /// Whether [`Action::Esc`](crate::Action::Esc) closes the overlay.
    pub fn closes_on_esc(&self) -> bool {
        self.close_on_esc == Some(true)
    }

    /// Whether [`Action::Scroll`](crate::Action::Scroll) closes the overlay.
    pub fn closes_on_scroll(&self) -> bool {
        self.close_on_scroll == Some(true)
    }

    /// Whether opening suspends, and closing restores, background scroll.
    pub fn locks_background_scroll(&self) -> bool {
        self.mode() == Mode::Modal && self.disable_background_scroll == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_like_an_unconfigured_overlay() {
        let cfg = OverlayConfig::default();
        assert_eq!(cfg.mode(), Mode::Tooltip);
        assert_eq!(cfg.side(), Side::Center);
        assert_eq!(cfg.offset(), 8.0);
        assert!(cfg.closes_on_outside());
        assert!(!cfg.closes_on_esc());
        assert!(!cfg.closes_on_scroll());
        assert!(!cfg.locks_background_scroll());
    }

    #[test]
    fn close_on_outside_is_disabled_only_by_explicit_false() {
        assert!(OverlayConfig::default().with_close_on_outside(true).closes_on_outside());
        assert!(!OverlayConfig::default().with_close_on_outside(false).closes_on_outside());
    }

    #[test]
    fn background_scroll_lock_needs_modal_mode() {
        let menu = OverlayConfig::menu().with_disable_background_scroll(true);
        assert!(!menu.locks_background_scroll());
        assert!(OverlayConfig::modal().locks_background_scroll());
    }

    #[test]
    fn merge_overwrites_set_fields_only() {
        let mut cfg = OverlayConfig::menu().with_offset(4.0);
        cfg.merge(OverlayConfig {
            preferred: Some(Side::Right),
            close_on_esc: Some(true),
            ..OverlayConfig::default()
        });
        assert_eq!(cfg.side(), Side::Right);
        assert!(cfg.closes_on_esc());
        // Untouched by the patch.
        assert_eq!(cfg.mode(), Mode::Menu);
        assert_eq!(cfg.offset(), 4.0);
        assert!(cfg.closes_on_outside());
    }

    #[test]
    fn merging_an_empty_patch_is_a_no_op() {
        let mut cfg = OverlayConfig::modal().with_boundary(Rect::new(0.0, 0.0, 10.0, 10.0));
        let before = cfg.clone();
        cfg.merge(OverlayConfig::default());
        assert_eq!(cfg, before);
    }
}
