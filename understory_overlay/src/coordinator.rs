// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator: overlay registry, bus consumer, and observer fan-out.
//!
//! ## Serialization
//!
//! Every action goes through the [`ActionBus`], including those passed to
//! [`Coordinator::dispatch`]. [`Coordinator::drain`] takes them one at a time in arrival order and
//! runs each to completion: transition decision, state commit, observer notification, effect.
//! Only then is the next action taken, so two transitions for the same overlay never interleave.
//!
//! ## Teardown
//!
//! [`Coordinator::unregister`] drops the entry together with its observers and purges any actions
//! for that id still waiting on the bus. Actions for ids that are not registered are dropped
//! silently when they are reached.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use understory_placement::{Placement, Request, solve};

use crate::bus::ActionBus;
use crate::config::OverlayConfig;
use crate::error::NotFoundError;
use crate::host::{Geometry, OverlayHost};
use crate::machine::transition;
use crate::types::{Action, Change, Effect, OverlayId, OverlayState};

type Observer = Box<dyn FnMut(&Notice<'_>)>;
type EffectHandler = Box<dyn FnMut(&OverlayId, Effect)>;

struct Entry {
    config: OverlayConfig,
    state: OverlayState,
    observers: Vec<(u64, Observer)>,
}

/// A committed state change as seen by an observer.
///
/// Carries the entry's config so an observer can position the container on
/// [`OverlayState::Open`] without going back through the [`Coordinator`], which is busy
/// draining the bus while observers run.
#[derive(Debug)]
pub struct Notice<'a> {
    /// Overlay whose state is reported.
    pub id: &'a OverlayId,
    /// State after the change (or the current state, when replayed on subscribe).
    pub state: OverlayState,
    /// The overlay's config at the time of the notice.
    pub config: &'a OverlayConfig,
}

impl Notice<'_> {
    /// Solve the container position for a geometry snapshot.
    ///
    /// Same result as [`Coordinator::update_position`] for this overlay.
    pub fn update_position(&self, geometry: &Geometry) -> Placement {
        place(self.config, geometry)
    }

    /// Measure, solve, and apply the position through `host`.
    ///
    /// Same call order as [`Coordinator::present`].
    pub fn present(&self, host: &mut impl OverlayHost) -> Placement {
        present_with(self.id, self.config, host)
    }
}

/// Handle returned by [`Coordinator::subscribe`]; pass it to [`Coordinator::unsubscribe`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Subscription {
    id: OverlayId,
    key: u64,
}

impl Subscription {
    /// Overlay this subscription observes.
    pub fn overlay(&self) -> &OverlayId {
        &self.id
    }
}

/// Registry and state machine for all overlays of one UI.
///
/// ## Usage
///
/// - [`register`](Self::register) each overlay with its [`OverlayConfig`].
/// - [`subscribe`](Self::subscribe) to react to state changes; the current state is delivered
///   immediately.
/// - Feed input through [`dispatch`](Self::dispatch), or [`send`](ActionBus::send) on a
///   [`bus`](Self::bus) handle and [`drain`](Self::drain) later.
/// - On [`OverlayState::Open`], position the container with
///   [`update_position`](Self::update_position) or [`present`](Self::present).
///
/// The coordinator is single-threaded: observers and the bus use `Rc`, so it is neither `Send`
/// nor `Sync`.
pub struct Coordinator {
    entries: BTreeMap<OverlayId, Entry>,
    bus: ActionBus,
    next_key: u64,
    effect_handler: Option<EffectHandler>,
}

impl core::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let open = self.entries.values().filter(|e| e.state.is_open()).count();
        f.debug_struct("Coordinator")
            .field("overlays", &self.entries.len())
            .field("open", &open)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Create an empty coordinator with its own bus.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            bus: ActionBus::new(),
            next_key: 0,
            effect_handler: None,
        }
    }

    /// A producer handle onto this coordinator's bus.
    pub fn bus(&self) -> ActionBus {
        self.bus.clone()
    }

    /// Install the handler that carries out transition [`Effect`]s (page scroll lock).
    pub fn set_effect_handler(&mut self, handler: impl FnMut(&OverlayId, Effect) + 'static) {
        self.effect_handler = Some(Box::new(handler));
    }

    /// Register an overlay, or merge `config` into an existing registration.
    ///
    /// A new overlay starts [`Closed`](OverlayState::Closed). Re-registering keeps the current
    /// state and observers and [merges](OverlayConfig::merge) the config.
    pub fn register(&mut self, id: impl Into<OverlayId>, config: OverlayConfig) {
        let id = id.into();
        if let Some(entry) = self.entries.get_mut(id.as_str()) {
            entry.config.merge(config);
            tracing::debug!(%id, "overlay config merged");
            return;
        }
        tracing::debug!(%id, mode = ?config.mode(), "overlay registered");
        self.entries.insert(
            id,
            Entry {
                config,
                state: OverlayState::Closed,
                observers: Vec::new(),
            },
        );
    }

    /// Remove an overlay. Unknown ids are ignored, so this may be called repeatedly.
    ///
    /// Observers are dropped without a final notification, and queued actions for `id` are
    /// discarded. If the overlay was open and holding the background scroll lock,
    /// [`Effect::RestoreScroll`] is sent to the effect handler.
    pub fn unregister(&mut self, id: &str) {
        let purged = self.bus.purge(id);
        let Some((id, entry)) = self.entries.remove_entry(id) else {
            tracing::trace!(id, "unregister of unknown overlay ignored");
            return;
        };
        tracing::debug!(%id, purged, "overlay unregistered");
        if entry.state.is_open()
            && entry.config.locks_background_scroll()
            && let Some(handler) = &mut self.effect_handler
        {
            handler(&id, Effect::RestoreScroll);
        }
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no overlay is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current config of `id`, if registered.
    pub fn config(&self, id: &str) -> Option<&OverlayConfig> {
        self.entries.get(id).map(|e| &e.config)
    }

    /// Current state of `id`.
    pub fn state(&self, id: &str) -> Result<OverlayState, NotFoundError> {
        self.entries
            .get(id)
            .map(|e| e.state)
            .ok_or_else(|| NotFoundError { id: id.into() })
    }

    /// Ids of all open overlays, in id order.
    pub fn open_overlays(&self) -> impl Iterator<Item = &OverlayId> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| e.state.is_open())
            .map(|(id, _)| id)
    }

    /// Observe state changes of `id`.
    ///
    /// `observer` is called right away with the current state, then once per state change, after
    /// the change is committed. It is dropped when unsubscribed or when `id` is unregistered.
    pub fn subscribe(
        &mut self,
        id: &str,
        mut observer: impl FnMut(OverlayState) + 'static,
    ) -> Result<Subscription, NotFoundError> {
        self.subscribe_with(id, move |notice| observer(notice.state))
    }

    /// Like [`subscribe`](Self::subscribe), but the observer receives a [`Notice`] it can use
    /// to position the container.
    pub fn subscribe_with(
        &mut self,
        id: &str,
        mut observer: impl FnMut(&Notice<'_>) + 'static,
    ) -> Result<Subscription, NotFoundError> {
        let Some((id, entry)) = self.entries.get_key_value(id) else {
            return Err(NotFoundError { id: id.into() });
        };
        observer(&Notice {
            id,
            state: entry.state,
            config: &entry.config,
        });
        let id = id.clone();
        let key = self.next_key;
        self.next_key += 1;
        if let Some(entry) = self.entries.get_mut(id.as_str()) {
            entry.observers.push((key, Box::new(observer)));
        }
        Ok(Subscription { id, key })
    }

    /// Stop an observer. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: &Subscription) -> bool {
        let Some(entry) = self.entries.get_mut(subscription.id.as_str()) else {
            return false;
        };
        let before = entry.observers.len();
        entry.observers.retain(|(key, _)| *key != subscription.key);
        entry.observers.len() != before
    }

    /// Queue `action` for `id` and process the bus until it is empty.
    ///
    /// Returns the state changes made, including those caused by actions queued earlier or by
    /// observers during this call.
    pub fn dispatch(&mut self, id: impl Into<OverlayId>, action: Action) -> Vec<Change> {
        self.bus.send(id, action);
        self.drain()
    }

    /// Process queued actions in arrival order until the bus is empty.
    pub fn drain(&mut self) -> Vec<Change> {
        let mut changes = Vec::new();
        while let Some((id, action)) = self.bus.pop() {
            if let Some(change) = self.apply(id, action) {
                changes.push(change);
            }
        }
        changes
    }

    fn apply(&mut self, id: OverlayId, action: Action) -> Option<Change> {
        let Some(entry) = self.entries.get_mut(id.as_str()) else {
            tracing::trace!(%id, ?action, "action for unknown overlay dropped");
            return None;
        };
        let Some(step) = transition(entry.state, action, &entry.config) else {
            tracing::trace!(%id, ?action, state = ?entry.state, "action left state unchanged");
            return None;
        };

        let from = entry.state;
        entry.state = step.next;
        tracing::debug!(%id, ?action, ?from, to = ?step.next, "overlay state changed");

        let notice = Notice {
            id: &id,
            state: step.next,
            config: &entry.config,
        };
        for (_, observer) in &mut entry.observers {
            observer(&notice);
        }
        if let (Some(effect), Some(handler)) = (step.effect, &mut self.effect_handler) {
            handler(&id, effect);
        }

        Some(Change {
            id,
            action,
            from,
            to: step.next,
            effect: step.effect,
        })
    }

    /// Solve the position of `id` for a geometry snapshot.
    ///
    /// The boundary is the snapshot's live boundary if present, else the config's fixed
    /// boundary, else the viewport. Returns `None` for unknown ids.
    pub fn update_position(&self, id: &str, geometry: &Geometry) -> Option<Placement> {
        let Some(entry) = self.entries.get(id) else {
            tracing::trace!(id, "position update for unknown overlay ignored");
            return None;
        };
        Some(place(&entry.config, geometry))
    }

    /// Measure, solve, and apply the position of `id` through `host`.
    ///
    /// See [`OverlayHost`] for the call order. Returns `None`, without touching the host, for
    /// unknown ids.
    pub fn present(&self, id: &str, host: &mut impl OverlayHost) -> Option<Placement> {
        let (id, entry) = self.entries.get_key_value(id)?;
        Some(present_with(id, &entry.config, host))
    }
}

fn place(config: &OverlayConfig, geometry: &Geometry) -> Placement {
    let boundary = geometry
        .boundary
        .or(config.boundary)
        .unwrap_or(geometry.viewport);
    let request = Request::new(
        geometry.trigger,
        geometry.container.abs().size(),
        geometry.viewport,
    )
    .with_boundary(boundary)
    .with_side(config.side())
    .with_offset(config.offset())
    .with_mode(config.mode());
    solve(&request)
}

fn present_with(id: &OverlayId, config: &OverlayConfig, host: &mut impl OverlayHost) -> Placement {
    host.prepare_measure(id);
    let geometry = host.measure(id);
    let placement = place(config, &geometry);
    host.apply_placement(id, &placement);
    host.finish_measure(id);
    placement
}
