// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition function.
//!
//! ## Table
//!
//! | Current | Action | Condition | Next |
//! |---|---|---|---|
//! | `Closed` | `Open`, `Toggle` | | `Open` |
//! | `Open` | `Close`, `Toggle` | | `Closed` |
//! | `Open` | `Outside` | [`closes_on_outside`](OverlayConfig::closes_on_outside) | `Closed` |
//! | `Open` | `Esc` | [`closes_on_esc`](OverlayConfig::closes_on_esc) | `Closed` |
//! | `Open` | `Scroll` | [`closes_on_scroll`](OverlayConfig::closes_on_scroll) | `Closed` |
//!
//! Every other combination leaves the state unchanged, including `Open` while open, `Close`
//! while closed, and the hover actions, which wiring maps to `Open`/`Close` itself.
//!
//! Opening requests [`Effect::SuspendScroll`] and closing requests [`Effect::RestoreScroll`] when
//! the config [locks background scroll](OverlayConfig::locks_background_scroll).

use crate::config::OverlayConfig;
use crate::types::{Action, Effect, OverlayState, Transition};

/// Decide the next state for `action`.
///
/// Returns `None` when the state does not change; such actions produce no notification and no
/// effect.
pub fn transition(
    current: OverlayState,
    action: Action,
    config: &OverlayConfig,
) -> Option<Transition> {
    use OverlayState::{Closed, Open};

    let next = match (current, action) {
        (Closed, Action::Open | Action::Toggle) => Open,
        (Open, Action::Close | Action::Toggle) => Closed,
        (Open, Action::Outside) if config.closes_on_outside() => Closed,
        (Open, Action::Esc) if config.closes_on_esc() => Closed,
        (Open, Action::Scroll) if config.closes_on_scroll() => Closed,
        _ => return None,
    };

    let effect = config.locks_background_scroll().then_some(match next {
        Open => Effect::SuspendScroll,
        Closed => Effect::RestoreScroll,
    });
    Some(Transition { next, effect })
}

#[cfg(test)]
mod tests {
    use super::*;
    use OverlayState::{Closed, Open};

    const ALL_ACTIONS: [Action; 8] = [
        Action::Open,
        Action::Close,
        Action::Toggle,
        Action::Outside,
        Action::Esc,
        Action::Scroll,
        Action::HoverIn,
        Action::HoverOut,
    ];

    fn next(current: OverlayState, action: Action, config: &OverlayConfig) -> OverlayState {
        transition(current, action, config).map_or(current, |t| t.next)
    }

    #[test]
    fn open_close_toggle() {
        let cfg = OverlayConfig::menu();
        assert_eq!(next(Closed, Action::Open, &cfg), Open);
        assert_eq!(next(Open, Action::Close, &cfg), Closed);
        assert_eq!(next(Closed, Action::Toggle, &cfg), Open);
        assert_eq!(next(Open, Action::Toggle, &cfg), Closed);
    }

    #[test]
    fn repeated_open_or_close_is_unchanged() {
        let cfg = OverlayConfig::menu();
        assert_eq!(transition(Open, Action::Open, &cfg), None);
        assert_eq!(transition(Closed, Action::Close, &cfg), None);
    }

    #[test]
    fn closed_overlays_ignore_everything_but_open_and_toggle() {
        let cfg = OverlayConfig::modal().with_close_on_scroll(true);
        for action in ALL_ACTIONS {
            let expected = matches!(action, Action::Open | Action::Toggle);
            assert_eq!(
                transition(Closed, action, &cfg).is_some(),
                expected,
                "{action:?} on a closed overlay"
            );
        }
    }

    #[test]
    fn outside_closes_unless_explicitly_disabled() {
        assert_eq!(next(Open, Action::Outside, &OverlayConfig::default()), Closed);
        assert_eq!(next(Open, Action::Outside, &OverlayConfig::menu()), Closed);
        let sticky = OverlayConfig::menu().with_close_on_outside(false);
        assert_eq!(transition(Open, Action::Outside, &sticky), None);
    }

    #[test]
    fn esc_closes_only_when_enabled() {
        assert_eq!(transition(Open, Action::Esc, &OverlayConfig::default()), None);
        assert_eq!(transition(Open, Action::Esc, &OverlayConfig::menu()), None);
        assert_eq!(next(Open, Action::Esc, &OverlayConfig::modal()), Closed);
    }

    #[test]
    fn scroll_closes_only_when_enabled() {
        assert_eq!(transition(Open, Action::Scroll, &OverlayConfig::menu()), None);
        let cfg = OverlayConfig::menu().with_close_on_scroll(true);
        assert_eq!(next(Open, Action::Scroll, &cfg), Closed);
    }

    #[test]
    fn hover_actions_never_change_state() {
        let cfg = OverlayConfig::tooltip();
        for state in [Open, Closed] {
            assert_eq!(transition(state, Action::HoverIn, &cfg), None);
            assert_eq!(transition(state, Action::HoverOut, &cfg), None);
        }
    }

    #[test]
    fn modal_scroll_lock_effects() {
        let cfg = OverlayConfig::modal();
        let open = transition(Closed, Action::Open, &cfg).unwrap();
        assert_eq!(open.effect, Some(Effect::SuspendScroll));
        for action in [Action::Close, Action::Toggle, Action::Outside, Action::Esc] {
            let close = transition(Open, action, &cfg).unwrap();
            assert_eq!(close.effect, Some(Effect::RestoreScroll), "{action:?}");
        }
    }

    #[test]
    fn no_effects_without_scroll_lock() {
        let unlocked = OverlayConfig::modal().with_disable_background_scroll(false);
        let menu = OverlayConfig::menu().with_disable_background_scroll(true);
        for cfg in [unlocked, menu] {
            assert_eq!(transition(Closed, Action::Open, &cfg).unwrap().effect, None);
            assert_eq!(transition(Open, Action::Close, &cfg).unwrap().effect, None);
        }
    }
}
