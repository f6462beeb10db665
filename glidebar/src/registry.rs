use alloc::vec;
use alloc::vec::Vec;

use crate::{LayoutMeasurement, LayoutRect, ResolveError, TargetOffset, resolve_target_offset};

/// What a call to [`LayoutRegistry::record`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordOutcome {
    /// First measurement for this index; the registry grew.
    Inserted,
    /// A re-measurement with a different value.
    Replaced,
    /// Same value as the stored one.
    Unchanged,
    /// Index out of range or non-finite position; nothing was stored.
    Rejected,
}

impl RecordOutcome {
    /// `true` when the resolver output may differ and must be recomputed.
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Inserted | Self::Replaced)
    }
}

/// Accumulates tab positions as the host layout engine reports them.
///
/// Reports may arrive in any order and may repeat (e.g. after a rotation). Each index holds at
/// most one entry; later reports overwrite earlier ones in place, so [`Self::measurements`]
/// keeps first-arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutRegistry {
    tab_count: usize,
    entries: Vec<LayoutMeasurement>,
    slots: Vec<Option<usize>>, // tab index -> position in `entries`
}

impl LayoutRegistry {
    pub fn new(tab_count: usize) -> Self {
        Self {
            tab_count,
            entries: Vec::with_capacity(tab_count),
            slots: vec![None; tab_count],
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` once every tab has reported at least once.
    pub fn is_complete(&self) -> bool {
        self.entries.len() >= self.tab_count
    }

    pub fn measurements(&self) -> &[LayoutMeasurement] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        let pos = (*self.slots.get(index)?)?;
        Some(self.entries[pos].x)
    }

    pub fn record(&mut self, index: usize, x: f32) -> RecordOutcome {
        if index >= self.tab_count {
            gwarn!(index, tab_count = self.tab_count, "record: out-of-range tab index");
            return RecordOutcome::Rejected;
        }
        if !x.is_finite() {
            gwarn!(index, "record: non-finite position");
            return RecordOutcome::Rejected;
        }

        let outcome = match self.slots[index] {
            Some(pos) => {
                let entry = &mut self.entries[pos];
                if entry.x == x {
                    return RecordOutcome::Unchanged;
                }
                entry.x = x;
                RecordOutcome::Replaced
            }
            None => {
                self.slots[index] = Some(self.entries.len());
                self.entries.push(LayoutMeasurement { index, x });
                RecordOutcome::Inserted
            }
        };

        gtrace!(index, x, len = self.entries.len(), "record");
        if outcome == RecordOutcome::Inserted && self.is_complete() {
            gdebug!(tab_count = self.tab_count, "layout registry complete");
        }
        outcome
    }

    /// Records the horizontal position of a reported layout box.
    pub fn record_rect(&mut self, index: usize, rect: LayoutRect) -> RecordOutcome {
        self.record(index, rect.x)
    }

    /// Resolves the indicator target for `active_index` against the current measurements.
    pub fn resolve(&self, active_index: usize, inset: f32) -> Result<TargetOffset, ResolveError> {
        resolve_target_offset(active_index, &self.entries, self.tab_count, inset)
    }
}
