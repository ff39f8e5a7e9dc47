// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a render surface offers to the chart layer.

use kurbo::Point;

use crate::diff::MarkDiff;
use crate::mark::{MarkId, MarkPayload};

/// A surface that keeps one element per stable mark id.
pub trait MarkSurface {
    /// Creates an element for a new mark.
    fn enter(&mut self, id: MarkId, z_index: i32, payload: &MarkPayload);

    /// Updates the element of a surviving mark in place.
    fn update(&mut self, id: MarkId, z_index: i32, payload: &MarkPayload);

    /// Destroys the element of a removed mark.
    fn exit(&mut self, id: MarkId);

    /// Applies a batch of diffs in order.
    fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => self.enter(*id, *z_index, new),
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => self.update(*id, *new_z_index, new),
                MarkDiff::Exit { id, .. } => self.exit(*id),
            }
        }
    }
}

/// Pointer events a surface delivers for the element under the pointer.
///
/// Positions are page coordinates.
pub trait PointerHandler {
    /// The pointer entered the element of `id`.
    fn on_pointer_enter(&mut self, id: MarkId, page: Point);

    /// The pointer left the element of `id`.
    fn on_pointer_leave(&mut self, id: MarkId);
}
