// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed mark model and scene reconciliation for `calor`.
//!
//! Chart layers recompute their full set of marks on every render pass. This crate turns
//! that into minimal, keyed operations:
//! - [`Mark`]s carry a stable [`MarkId`] and a materialized [`MarkPayload`].
//! - [`reconcile`] is a pure function splitting keys into create/update/remove lists.
//! - [`Scene::tick`] applies a reconciliation and reports [`MarkDiff`]s for a render surface.
//!
//! Surfaces implement [`MarkSurface`] to consume diffs and drive [`PointerHandler`] with
//! pointer events addressed by mark id.

#![no_std]

extern crate alloc;

mod diff;
mod mark;
mod reconcile;
mod scene;
mod surface;

pub use diff::MarkDiff;
pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, RectPayload, TextAnchor, TextBaseline,
    TextPayload,
};
pub use reconcile::{Reconciliation, reconcile};
pub use scene::Scene;
pub use surface::{MarkSurface, PointerHandler};
