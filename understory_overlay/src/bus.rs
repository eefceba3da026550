// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The action bus: an ordered, single-consumer queue of `(id, action)` pairs.
//!
//! Handles are cheap clones sharing one queue. Any number of producers (widget wiring, observers,
//! timers) may [`send`](ActionBus::send); the [`Coordinator`](crate::Coordinator) that created the
//! bus is the only consumer and drains it strictly in arrival order.
//!
//! Sending never processes anything by itself. An observer that sends while being notified does
//! not re-enter the state machine: its action waits until the current dispatch has finished.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::types::{Action, OverlayId};

/// Producer handle onto a coordinator's action queue.
#[derive(Clone, Default)]
pub struct ActionBus {
    queue: Rc<RefCell<VecDeque<(OverlayId, Action)>>>,
}

impl core::fmt::Debug for ActionBus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionBus")
            .field("pending", &self.len())
            .finish_non_exhaustive()
    }
}

impl ActionBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` for `id` behind everything already queued.
    pub fn send(&self, id: impl Into<OverlayId>, action: Action) {
        self.queue.borrow_mut().push_back((id.into(), action));
    }

    /// Number of actions waiting to be processed.
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub(crate) fn pop(&self) -> Option<(OverlayId, Action)> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drop every queued action addressed to `id`, keeping the order of the rest.
    pub(crate) fn purge(&self, id: &str) -> usize {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(target, _)| target.as_str() != id);
        before - queue.len()
    }
}
