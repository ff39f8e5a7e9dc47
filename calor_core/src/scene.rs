// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained mark set and its per-pass diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::diff::MarkDiff;
use crate::mark::{Mark, MarkId, MarkPayload};
use crate::reconcile::reconcile;

#[derive(Clone, Debug)]
struct MarkState {
    z_index: i32,
    payload: MarkPayload,
    entered_at: u64,
}

/// The retained, keyed mark set of one chart.
///
/// Each [`Scene::tick`] takes the full mark list of a render pass and reports what changed.
/// A surviving mark keeps its identity (and its `entered_at` pass number) across updates.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, MarkState>,
    pass: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no mark is retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` if a mark with this id is retained.
    pub fn contains(&self, id: MarkId) -> bool {
        self.marks.contains_key(&id)
    }

    /// Returns the retained payload for `id`.
    pub fn payload(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|s| &s.payload)
    }

    /// Returns the retained paint order for `id`.
    pub fn z_index(&self, id: MarkId) -> Option<i32> {
        self.marks.get(&id).map(|s| s.z_index)
    }

    /// Returns the pass number in which `id` entered the scene.
    pub fn entered_at(&self, id: MarkId) -> Option<u64> {
        self.marks.get(&id).map(|s| s.entered_at)
    }

    /// Number of completed passes.
    pub fn pass(&self) -> u64 {
        self.pass
    }

    /// Iterates over retained ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = MarkId> + '_ {
        self.marks.keys().copied()
    }

    /// Runs one render pass.
    ///
    /// Exits are reported first, then enters and updates in mark order. Updates are only
    /// reported for marks whose payload or paint order changed. A mark whose kind changed
    /// is reported as an exit followed by an enter. If an id appears several times, the
    /// last mark wins.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let marks: Vec<Mark> = marks.into_iter().collect();
        let plan = reconcile(self.marks.keys().copied(), &marks);
        self.pass += 1;
        let pass = self.pass;

        let mut latest: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in marks {
            latest.insert(mark.id, mark);
        }

        let mut diffs = Vec::with_capacity(plan.create.len() + plan.remove.len());
        for id in &plan.remove {
            if let Some(old) = self.marks.remove(id) {
                diffs.push(exit(*id, &old.payload));
            }
        }

        let mut enters = 0_usize;
        let mut updates = 0_usize;
        for id in plan.create.iter().chain(plan.update.iter()) {
            let Some(mark) = latest.remove(id) else {
                continue;
            };
            match self.marks.get_mut(id) {
                Some(state) if state.payload.kind() == mark.kind() => {
                    if state.payload == mark.payload && state.z_index == mark.z_index {
                        continue;
                    }
                    let old = core::mem::replace(&mut state.payload, mark.payload.clone());
                    let old_z_index = core::mem::replace(&mut state.z_index, mark.z_index);
                    diffs.push(MarkDiff::Update {
                        id: *id,
                        kind: mark.kind(),
                        old_z_index,
                        new_z_index: mark.z_index,
                        old_bounds: old.bounds(),
                        new_bounds: mark.payload.bounds(),
                        old: Box::new(old),
                        new: Box::new(mark.payload),
                    });
                    updates += 1;
                }
                Some(state) => {
                    diffs.push(exit(*id, &state.payload));
                    diffs.push(enter(&mark));
                    *state = MarkState {
                        z_index: mark.z_index,
                        payload: mark.payload,
                        entered_at: pass,
                    };
                    enters += 1;
                }
                None => {
                    diffs.push(enter(&mark));
                    self.marks.insert(
                        *id,
                        MarkState {
                            z_index: mark.z_index,
                            payload: mark.payload,
                            entered_at: pass,
                        },
                    );
                    enters += 1;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            pass,
            enters,
            updates,
            exits = plan.remove.len(),
            "scene tick"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (enters, updates);

        diffs
    }

    /// Removes every mark, reporting an exit for each (ascending by id).
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.tick(core::iter::empty())
    }
}

fn enter(mark: &Mark) -> MarkDiff {
    MarkDiff::Enter {
        id: mark.id,
        kind: mark.kind(),
        z_index: mark.z_index,
        bounds: mark.payload.bounds(),
        new: Box::new(mark.payload.clone()),
    }
}

fn exit(id: MarkId, payload: &MarkPayload) -> MarkDiff {
    MarkDiff::Exit {
        id,
        kind: payload.kind(),
        bounds: payload.bounds(),
    }
}
