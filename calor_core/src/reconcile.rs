// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure enter/update/exit key partitioning.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::mark::{Mark, MarkId};

/// The three disjoint key sets needed to move a keyed element set to a new mark list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Keys present now but not before, in next-mark order.
    pub create: Vec<MarkId>,
    /// Keys present before and now, in next-mark order.
    pub update: Vec<MarkId>,
    /// Keys present before but not now, ascending.
    pub remove: Vec<MarkId>,
}

impl Reconciliation {
    /// Returns `true` if nothing is created or removed.
    pub fn is_pure_update(&self) -> bool {
        self.create.is_empty() && self.remove.is_empty()
    }

    /// Total number of keys touched.
    pub fn len(&self) -> usize {
        self.create.len() + self.update.len() + self.remove.len()
    }

    /// Returns `true` if no key is touched at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions keys into create/update/remove lists.
///
/// `previous` is the key set of the current element set. A key that appears several times in
/// `next` is listed once, at its first position.
pub fn reconcile(previous: impl IntoIterator<Item = MarkId>, next: &[Mark]) -> Reconciliation {
    let previous: HashSet<MarkId> = previous.into_iter().collect();
    let mut seen: HashSet<MarkId> = HashSet::with_capacity(next.len());
    let mut out = Reconciliation::default();

    for mark in next {
        if !seen.insert(mark.id) {
            continue;
        }
        if previous.contains(&mark.id) {
            out.update.push(mark.id);
        } else {
            out.create.push(mark.id);
        }
    }

    out.remove = previous.difference(&seen).copied().collect();
    out.remove.sort_unstable();
    out
}
