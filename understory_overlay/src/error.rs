// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors.

use crate::types::OverlayId;

/// A query named an overlay that is not registered.
///
/// Only [`Coordinator::state`](crate::Coordinator::state) and
/// [`Coordinator::subscribe`](crate::Coordinator::subscribe) return this. Mutating calls treat
/// unknown ids as no-ops, since teardown can race with actions already in flight.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("overlay `{id}` is not registered")]
pub struct NotFoundError {
    /// The unknown identifier.
    pub id: OverlayId,
}
