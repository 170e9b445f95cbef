//! VisibilityFilter value object - which items of a collection are shown
//!
//! A filter never reorders or deletes the collection it covers. Hidden rows
//! are skipped by mapping a dense ordinal (position among visible items)
//! back to the underlying index.

use crate::error::{DexViewError, DexViewResult};

/// Boolean slot per item of an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityFilter {
    slots: Vec<bool>,
}

impl VisibilityFilter {
    /// Create a filter of `len` slots, all set to `initial`
    pub fn new(len: usize, initial: bool) -> Self {
        Self {
            slots: vec![initial; len],
        }
    }

    /// Build a filter from a precomputed mask
    pub fn from_mask(slots: Vec<bool>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Overwrite every slot
    pub fn set_all(&mut self, visible: bool) {
        self.slots.fill(visible);
    }

    /// Set one slot
    pub fn set(&mut self, index: usize, visible: bool) -> DexViewResult<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DexViewError::OutOfRange { index, len })?;
        *slot = visible;
        Ok(())
    }

    /// Whether the item at `index` is visible; out-of-range reads are hidden
    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    /// Number of visible slots
    pub fn true_count(&self) -> usize {
        self.slots.iter().filter(|visible| **visible).count()
    }

    /// Underlying index of the `dense_index`-th visible slot.
    ///
    /// Returns `None` when `dense_index >= true_count()`.
    pub fn map_dense_index(&self, dense_index: usize) -> Option<usize> {
        self.visible_indices().nth(dense_index)
    }

    /// Like [`map_dense_index`](Self::map_dense_index), reporting `OutOfRange`
    pub fn try_map_dense_index(&self, dense_index: usize) -> DexViewResult<usize> {
        self.map_dense_index(dense_index)
            .ok_or_else(|| DexViewError::OutOfRange {
                index: dense_index,
                len: self.true_count(),
            })
    }

    /// Inverse of `map_dense_index`: ordinal of a visible underlying slot
    pub fn dense_index_of(&self, index: usize) -> Option<usize> {
        if !self.is_visible(index) {
            return None;
        }
        Some(self.slots[..index].iter().filter(|v| **v).count())
    }

    /// Underlying indices of visible slots, ascending
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, visible)| visible.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.slots
    }
}
