// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable mark ids for heat map elements.
//!
//! Each element family lives in its own id namespace (bits 40 and up). Cells encode their
//! `(year, month)` in the low bits so an id can be mapped back to its cell.

use calor_core::MarkId;

const NAMESPACE_SHIFT: u32 = 40;
const CELL_NAMESPACE: u64 = 1 << NAMESPACE_SHIFT;
const CELL_PAYLOAD_MASK: u64 = (1 << 36) - 1;

/// Id base of the legend (swatches, then labels at `+1000`).
pub const LEGEND_ID_BASE: u64 = 2 << NAMESPACE_SHIFT;
/// Id base of the month labels.
pub const MONTH_LABEL_ID_BASE: u64 = 3 << NAMESPACE_SHIFT;
/// Id base of the year axis.
pub const YEAR_AXIS_ID_BASE: u64 = 4 << NAMESPACE_SHIFT;
/// Id of the vertical "Months" title.
pub const MONTHS_TITLE_ID: MarkId = MarkId::from_raw(5 << NAMESPACE_SHIFT);

/// Identity of one heat map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month in `1..=12`.
    pub month: u8,
}

impl CellKey {
    /// Creates a key.
    pub const fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// The mark id of this cell.
    pub fn mark_id(self) -> MarkId {
        let year = u64::from(self.year.cast_unsigned());
        MarkId::from_raw(CELL_NAMESPACE | (year << 4) | u64::from(self.month & 0xF))
    }

    /// Maps a cell mark id back to its key; `None` for ids of other elements.
    pub fn from_mark_id(id: MarkId) -> Option<Self> {
        let raw = id.raw();
        if raw & !CELL_PAYLOAD_MASK != CELL_NAMESPACE {
            return None;
        }
        let year = u32::try_from((raw >> 4) & u64::from(u32::MAX)).ok()?;
        let month = u8::try_from(raw & 0xF).ok()?;
        (1..=12)
            .contains(&month)
            .then(|| Self::new(year.cast_signed(), month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ids_round_trip_including_negative_years() {
        for key in [
            CellKey::new(1753, 1),
            CellKey::new(2015, 12),
            CellKey::new(-44, 3),
        ] {
            assert_eq!(CellKey::from_mark_id(key.mark_id()), Some(key));
        }
    }

    #[test]
    fn other_namespaces_are_not_cells() {
        assert_eq!(CellKey::from_mark_id(MarkId::from_raw(LEGEND_ID_BASE + 3)), None);
        assert_eq!(CellKey::from_mark_id(MONTHS_TITLE_ID), None);
        assert_eq!(CellKey::from_mark_id(MarkId::from_raw(7)), None);
    }

    #[test]
    fn distinct_cells_have_distinct_ids() {
        assert_ne!(CellKey::new(2000, 1).mark_id(), CellKey::new(2000, 2).mark_id());
        assert_ne!(CellKey::new(2000, 1).mark_id(), CellKey::new(2001, 1).mark_id());
    }
}
