// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-mark changes reported by [`Scene::tick`](crate::Scene::tick).

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Rect;

use crate::mark::{MarkId, MarkKind, MarkPayload};

/// A keyed change a render surface applies to its element set.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// The mark is new: create an element for it.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// Exact bounds, if known.
        bounds: Option<Rect>,
        /// New contents.
        new: Box<MarkPayload>,
    },
    /// The mark survived and changed: update its element in place.
    Update {
        /// Mark id.
        id: MarkId,
        /// Payload kind (unchanged across an update).
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Previous bounds, if known.
        old_bounds: Option<Rect>,
        /// New bounds, if known.
        new_bounds: Option<Rect>,
        /// Previous contents.
        old: Box<MarkPayload>,
        /// New contents.
        new: Box<MarkPayload>,
    },
    /// The mark is gone: destroy its element.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Last known bounds, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    /// Returns `true` for [`MarkDiff::Enter`].
    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter { .. })
    }

    /// Returns `true` for [`MarkDiff::Update`].
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// Returns `true` for [`MarkDiff::Exit`].
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit { .. })
    }
}
